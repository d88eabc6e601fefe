//! Utilities for date formatting
//!
//! Dates travel as ISO `YYYY-MM-DD` and are shown as `DD/MM/YYYY`.
use chrono::{Local, NaiveDate};

/// Format a date as DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date_str(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15/03/2024");
        assert_eq!(format_opt_date(Some(d)), "15/03/2024");
        assert_eq!(format_opt_date(None), "-");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15"), "15/03/2024");
        assert_eq!(format_date_str("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_str("invalid"), "invalid");
    }

    #[test]
    fn test_input_value() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(to_input_value(Some(d)), "2024-12-01");
        assert_eq!(to_input_value(None), "");
        assert_eq!(parse_input_value(" 2024-12-01 "), Some(d));
        assert_eq!(parse_input_value(""), None);
    }
}
