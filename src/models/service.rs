use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FacilityService {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    // El backend devuelve aquí códigos sueltos o actividades completas
    #[serde(default)]
    pub activities: Vec<ActivityRef>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum ActivityRef {
    Code(String),
    Full(ServiceActivity),
}

impl ActivityRef {
    pub fn label(&self) -> &str {
        match self {
            ActivityRef::Code(code) => code,
            ActivityRef::Full(activity) => &activity.name,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ServiceActivity {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResource {
    pub id: i64,
    pub service_id: i64,
    #[serde(default)]
    pub service_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub activities: Vec<ServiceActivity>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    pub name: String,
    pub location: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub contact_number: String,
    pub availability: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub location: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub contact_number: String,
    pub activity_codes: Vec<String>,
    pub amenities: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub service_id: i64,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration_minutes: u32,
    pub base_price: f64,
    pub activity_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActivityPayload {
    pub code: String,
    pub name: String,
}
