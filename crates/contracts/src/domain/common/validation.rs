//! Field checks shared by the entity `validate()` methods

pub fn require_text(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} es obligatorio", label));
    }
    Ok(())
}

pub fn require_non_negative(value: f64, label: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} no puede ser negativo", label));
    }
    Ok(())
}

pub fn require_positive(value: f64, label: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} debe ser mayor que cero", label));
    }
    Ok(())
}

pub fn require_reference(value: i64, label: &str) -> Result<(), String> {
    if value <= 0 {
        return Err(format!("Debe seleccionar {}", label));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("Norte", "Nombre").is_ok());
        assert_eq!(
            require_text("   ", "Nombre").unwrap_err(),
            "Nombre es obligatorio"
        );
    }

    #[test]
    fn test_numeric_checks() {
        assert!(require_non_negative(0.0, "Costo").is_ok());
        assert!(require_non_negative(-0.5, "Costo").is_err());
        assert!(require_non_negative(f64::NAN, "Costo").is_err());
        assert!(require_positive(0.0, "Litros").is_err());
        assert!(require_positive(12.5, "Litros").is_ok());
    }

    #[test]
    fn test_require_reference() {
        assert!(require_reference(3, "una zona").is_ok());
        assert_eq!(
            require_reference(0, "una zona").unwrap_err(),
            "Debe seleccionar una zona"
        );
    }
}
