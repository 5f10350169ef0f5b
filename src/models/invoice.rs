use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTemplate {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub version: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewInvoiceTemplate {
    pub name: String,
    pub content: String,
}
