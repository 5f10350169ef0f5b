use serde::{Deserialize, Serialize};

/// Días a los que aplica una regla de precio
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    Weekday,
    Weekend,
    Holiday,
    #[default]
    All,
}

impl DayType {
    /// Valor wire del backend
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "WEEKDAY",
            DayType::Weekend => "WEEKEND",
            DayType::Holiday => "HOLIDAY",
            DayType::All => "ALL",
        }
    }

    /// Inverso de `as_str` para leer el `<select>` del formulario.
    /// Cualquier valor desconocido cae en ALL, el caso más amplio.
    pub fn parse(value: &str) -> Self {
        match value {
            "WEEKDAY" => DayType::Weekday,
            "WEEKEND" => DayType::Weekend,
            "HOLIDAY" => DayType::Holiday,
            _ => DayType::All,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    pub id: i64,
    pub resource_id: i64,
    #[serde(default)]
    pub resource_name: String,
    pub day_type: DayType,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub extra_charge: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceRule {
    pub resource_id: i64,
    pub day_type: DayType,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub base_price: Option<f64>,
    pub extra_charge: f64,
    pub reason: String,
    pub priority: i32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceRuleUpdate {
    pub day_type: DayType,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub base_price: Option<f64>,
    pub extra_charge: f64,
    pub reason: String,
    pub priority: i32,
    pub enabled: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig {
    pub id: i64,
    pub resource_id: i64,
    #[serde(default)]
    pub resource_name: String,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration_minutes: u32,
    pub base_price: f64,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub total_slots: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfigUpdate {
    pub resource_id: i64,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration_minutes: u32,
    pub base_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_uses_wire_values() {
        assert_eq!(
            serde_json::from_str::<DayType>("\"WEEKEND\"").unwrap(),
            DayType::Weekend
        );
        assert_eq!(serde_json::to_string(&DayType::All).unwrap(), "\"ALL\"");
    }

    #[test]
    fn test_day_type_parse_is_inverse_of_as_str() {
        for day in [
            DayType::Weekday,
            DayType::Weekend,
            DayType::Holiday,
            DayType::All,
        ] {
            assert_eq!(DayType::parse(day.as_str()), day);
        }
        // Un valor que no reconocemos cae en la regla más amplia
        assert_eq!(DayType::parse("FESTIVO"), DayType::All);
    }
}
