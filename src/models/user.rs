use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: i64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub confirmed_bookings: u64,
    #[serde(default)]
    pub cancelled_bookings: u64,
}
