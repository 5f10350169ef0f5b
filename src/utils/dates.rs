// Formateo de fechas de reserva. El backend siempre manda "YYYY-MM-DD";
// si llega otra cosa se muestra tal cual en vez de romper la pantalla.

use chrono::NaiveDate;

const WIRE_FORMAT: &str = "%Y-%m-%d";

/// "2025-03-15" → "15 March 2025"
pub fn format_long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, WIRE_FORMAT) {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "2025-03-15" → "15 Mar 2025"
pub fn format_short_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, WIRE_FORMAT) {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "2025-03-15" → "Sat, Mar 15" (cabecera del planificador diario)
pub fn format_day_heading(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, WIRE_FORMAT) {
        Ok(date) => date.format("%a, %b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "2025-03-15" → "15/03/2025"
pub fn format_numeric_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, WIRE_FORMAT) {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Timestamp ISO del backend → "14:30 • 15/03/2025".
/// Acepta con y sin fracción de segundo.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.split('.').next().unwrap_or(raw);
    match chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(stamp) => stamp.format("%H:%M • %d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Suma días a una fecha en formato wire. Si no parsea, devuelve la entrada.
pub fn shift_date(raw: &str, days: i64) -> String {
    match NaiveDate::parse_from_str(raw, WIRE_FORMAT) {
        Ok(date) => (date + chrono::Duration::days(days))
            .format(WIRE_FORMAT)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Fecha de hoy en formato wire (según el reloj del navegador)
pub fn today() -> String {
    chrono::Local::now().date_naive().format(WIRE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_formats() {
        assert_eq!(format_long_date("2025-03-15"), "15 March 2025");
        assert_eq!(format_short_date("2025-03-15"), "15 Mar 2025");
        assert_eq!(format_long_date("2025-12-01"), "1 December 2025");
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(format_day_heading("2025-03-15"), "Sat, Mar 15");
    }

    #[test]
    fn test_timestamp_with_and_without_fraction() {
        assert_eq!(format_timestamp("2025-03-15T14:30:00"), "14:30 • 15/03/2025");
        assert_eq!(
            format_timestamp("2025-03-15T14:30:00.123456"),
            "14:30 • 15/03/2025"
        );
        assert_eq!(format_timestamp("no-es-fecha"), "no-es-fecha");
    }

    #[test]
    fn test_numeric_date() {
        assert_eq!(format_numeric_date("2025-03-15"), "15/03/2025");
    }

    #[test]
    fn test_invalid_date_passes_through() {
        assert_eq!(format_long_date("15/03/2025"), "15/03/2025");
        assert_eq!(format_short_date(""), "");
        assert_eq!(shift_date("garbage", 1), "garbage");
    }

    #[test]
    fn test_shifting_days_crosses_months() {
        assert_eq!(shift_date("2025-03-31", 1), "2025-04-01");
        assert_eq!(shift_date("2025-03-01", -1), "2025-02-28");
        assert_eq!(shift_date("2024-02-28", 1), "2024-02-29");
    }
}
