//! Number formatting in the es-AR convention: `.` groups thousands, `,`
//! separates decimals.

/// Number with thousands separator and `decimals` decimal places
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut integer: String = grouped.chars().rev().collect();

    // "-0,00" reads badly
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{},{}", integer, d),
        None => integer,
    }
}

/// Pesos with two decimals: `$ 1.234.567,89`
pub fn format_money(value: f64) -> String {
    format!("$ {}", format_number_with_decimals(value, 2))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// `None` renders as a dash
pub fn format_opt(value: Option<f64>, decimals: u8) -> String {
    value
        .map(|v| format_number_with_decimals(v, decimals))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$ 1.234,56");
        assert_eq!(format_money(1234567.89), "$ 1.234.567,89");
        assert_eq!(format_money(0.0), "$ 0,00");
        assert_eq!(format_money(-1234.56), "$ -1.234,56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "-");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1.234");
    }

    #[test]
    fn test_percent_and_optional() {
        assert_eq!(format_percent(33.333, 1), "33,3%");
        assert_eq!(format_opt(None, 2), "-");
        assert_eq!(format_opt(Some(3.5), 2), "3,50");
    }
}
