use serde::{Deserialize, Serialize};

/// Ciclo de vida de una reserva, con los valores wire en mayúsculas
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Refunded,
}

impl BookingStatus {
    /// Valor wire tal y como lo emite el backend
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Refunded => "REFUNDED",
        }
    }

    /// Etiqueta legible para las tarjetas
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Refunded => "Refunded",
        }
    }

    /// Clase CSS del chip de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Refunded => "refunded",
        }
    }

    /// Solo las reservas que aún no concluyeron admiten cancelación
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// Estado de una franja en la rejilla de disponibilidad
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    #[default]
    Available,
    Booked,
    Blocked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Booked => "BOOKED",
            SlotStatus::Blocked => "BLOCKED",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingCustomer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PendingBooking {
    pub id: i64,
    pub reference: String,
    pub service_id: i64,
    pub service_name: String,
    pub resource_id: i64,
    pub resource_name: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: String,
    pub user: BookingCustomer,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AmountBreakdown {
    #[serde(default)]
    pub slot_subtotal: f64,
    #[serde(default)]
    pub platform_fee_percent: f64,
    #[serde(default)]
    pub platform_fee: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: i64,
    pub reference: String,
    pub service_id: i64,
    pub service_name: String,
    pub resource_id: i64,
    pub resource_name: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_date: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub amount_breakdown: AmountBreakdown,
    #[serde(default)]
    pub booking_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub child_bookings: serde_json::Value,
    #[serde(default)]
    pub status: BookingStatus,
    pub user: BookingCustomer,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBooking {
    pub id: i64,
    pub reference: String,
    pub service_id: i64,
    pub service_name: String,
    pub resource_id: i64,
    pub resource_name: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_date: String,
    #[serde(default)]
    pub status: BookingStatus,
    pub user: BookingCustomer,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSlot {
    pub slot_id: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: SlotStatus,
}

impl Default for AmountBreakdown {
    fn default() -> Self {
        Self {
            slot_subtotal: 0.0,
            platform_fee_percent: 0.0,
            platform_fee: 0.0,
            total_amount: 0.0,
            currency: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_reads_wire_values() {
        // El backend emite los estados en mayúsculas
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"CONFIRMED\"").unwrap(),
            BookingStatus::Confirmed
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::Refunded).unwrap(),
            "\"REFUNDED\""
        );
    }

    #[test]
    fn test_missing_slot_status_defaults_to_available() {
        let json = r#"{
            "slotId": "slot-7",
            "startTime": "10:00:00",
            "endTime": "10:30:00"
        }"#;
        let slot: ResourceSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(slot.status.as_str(), "AVAILABLE");
    }

    #[test]
    fn test_only_open_bookings_are_cancellable() {
        assert!(BookingStatus::Pending.is_cancellable());
        assert!(BookingStatus::Confirmed.is_cancellable());
        assert!(!BookingStatus::Completed.is_cancellable());
        assert!(!BookingStatus::Cancelled.is_cancellable());
        assert!(!BookingStatus::Refunded.is_cancellable());
    }
}
