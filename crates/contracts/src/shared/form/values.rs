use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Raw string values of a form, keyed by field key.
///
/// Every input keeps its text as typed; conversion happens on read so a
/// half-typed number never loses characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`FormValues::set`]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).trim().is_empty()
    }

    /// Parsed number; see [`parse_decimal`]
    pub fn parse_number(&self, key: &str) -> Option<f64> {
        parse_decimal(self.get(key))
    }

    /// Parsed number, `0.0` when blank or invalid
    pub fn number(&self, key: &str) -> f64 {
        self.parse_number(key).unwrap_or(0.0)
    }

    /// Selected foreign key; `None` for the empty option or garbage
    pub fn id(&self, key: &str) -> Option<i64> {
        self.get(key).trim().parse::<i64>().ok().filter(|id| *id > 0)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.get(key).trim(), "%Y-%m-%d").ok()
    }

    pub fn opt_text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_string()
    }
}

/// Number typed by the user. `1234.5` and the es-AR `1.234,5` both parse;
/// with a comma present, dots before it are thousand separators.
/// `None` when blank or invalid.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = match raw.rsplit_once(',') {
        Some((int_part, frac_part)) => format!("{}.{}", int_part.replace('.', ""), frac_part),
        None => raw.to_string(),
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format helpers for the opposite direction (entity → form)
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

pub(crate) fn id_text(value: Option<i64>) -> String {
    value.map(|id| id.to_string()).unwrap_or_default()
}

pub(crate) fn date_text(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub(crate) fn flag_text(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1500,75"), Some(1500.75));
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
        assert_eq!(parse_decimal("1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_decimal("1234.5"), Some(1234.5));
        assert_eq!(parse_decimal("1,234,5"), None);
        assert_eq!(parse_decimal("1,2.5"), None);
        assert_eq!(parse_decimal(" 3 "), Some(3.0));
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(number_text(2500.0), "2500");
    }

    #[test]
    fn test_number_parsing() {
        let values = FormValues::new()
            .with("a", "12,5")
            .with("b", " 7 ")
            .with("c", "abc")
            .with("d", "");
        assert_eq!(values.parse_number("a"), Some(12.5));
        assert_eq!(values.parse_number("b"), Some(7.0));
        assert_eq!(values.parse_number("c"), None);
        assert_eq!(values.parse_number("d"), None);
        assert_eq!(values.number("c"), 0.0);
        assert_eq!(values.number("missing"), 0.0);
    }

    #[test]
    fn test_ids_and_flags() {
        let values = FormValues::new()
            .with("zona_id", "4")
            .with("vacio", "")
            .with("cero", "0")
            .with("activo", "true");
        assert_eq!(values.id("zona_id"), Some(4));
        assert_eq!(values.id("vacio"), None);
        assert_eq!(values.id("cero"), None);
        assert!(values.flag("activo"));
        assert!(!values.flag("vacio"));
    }

    #[test]
    fn test_dates_and_text() {
        let values = FormValues::new()
            .with("fecha", "2024-05-17")
            .with("mala", "17/05/2024")
            .with("nota", "  ");
        assert_eq!(values.date("fecha"), NaiveDate::from_ymd_opt(2024, 5, 17));
        assert_eq!(values.date("mala"), None);
        assert_eq!(values.opt_text("nota"), None);
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(number_text(1500.0), "1500");
        assert_eq!(number_text(12.75), "12.75");
        assert_eq!(id_text(None), "");
        assert_eq!(date_text(NaiveDate::from_ymd_opt(2024, 1, 2)), "2024-01-02");
        assert_eq!(flag_text(true), "true");
    }
}
