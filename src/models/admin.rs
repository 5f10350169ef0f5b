use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub business_address: String,
    #[serde(default)]
    pub gst_number: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub business_name: String,
    pub business_address: String,
    pub gst_number: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRevenue {
    pub resource_id: i64,
    pub resource_name: String,
    pub booking_count: u64,
    pub total_revenue: f64,
    pub average_revenue_per_booking: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevenue {
    pub service_id: i64,
    pub service_name: String,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub average_revenue_per_booking: f64,
    #[serde(default)]
    pub resource_revenues: Vec<ResourceRevenue>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub admin_id: i64,
    pub admin_name: String,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub average_revenue_per_booking: f64,
    #[serde(default)]
    pub service_revenues: Vec<ServiceRevenue>,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub currency: String,
}
