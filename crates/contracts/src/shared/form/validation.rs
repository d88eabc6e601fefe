//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if self.required && value.is_empty() {
            return Err(format!("{} es obligatorio", field_label));
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if !value.is_empty() && length < min {
                return Err(format!(
                    "{} debe tener al menos {} caracteres",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!(
                    "{} no puede superar {} caracteres",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} debe ser un número", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} debe ser como mínimo {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} debe ser como máximo {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules {
            required: true,
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("Camión", "Nombre").is_ok());
        assert_eq!(
            rules.validate_string("  ", "Nombre").unwrap_err(),
            "Nombre es obligatorio"
        );
    }

    #[test]
    fn test_length_limits_count_chars() {
        let rules = ValidationRules {
            min_length: Some(2),
            max_length: Some(4),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("ñandú", "Código").is_err());
        assert!(rules.validate_string("ñu", "Código").is_ok());
        assert!(rules.validate_string("x", "Código").is_err());
        // optional and empty is fine even with a minimum length
        assert!(rules.validate_string("", "Código").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(50.0, "Porcentaje").is_ok());
        assert!(rules.validate_number(-1.0, "Porcentaje").is_err());
        assert!(rules.validate_number(100.5, "Porcentaje").is_err());
        assert!(rules.validate_number(f64::INFINITY, "Porcentaje").is_err());
    }
}
