//! Field descriptors

use super::validation::ValidationRules;
use super::values::FormValues;

/// How a field is rendered and parsed
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    TextArea,
    Number { step: f64 },
    Date,
    Checkbox,
    /// Dropdown whose options come from the named source (e.g. "zonas")
    Select { source: &'static str },
    /// Read-only value computed from the other fields; never submitted
    Result { compute: fn(&FormValues) -> f64 },
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number { .. } => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Select { .. } => "select",
            Self::Result { .. } => "result",
        }
    }
}

/// Declarative description of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            validation: ValidationRules::none(),
            placeholder: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn text_area(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn number(key: &'static str, label: &'static str, step: f64) -> Self {
        Self::new(key, label, FieldKind::Number { step })
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub fn select(key: &'static str, label: &'static str, source: &'static str) -> Self {
        Self::new(key, label, FieldKind::Select { source })
    }

    pub fn result(
        key: &'static str,
        label: &'static str,
        compute: fn(&FormValues) -> f64,
    ) -> Self {
        Self::new(key, label, FieldKind::Result { compute })
    }

    pub fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Result fields are display-only
    pub fn is_editable(&self) -> bool {
        !matches!(self.kind, FieldKind::Result { .. })
    }

    /// Current value of a result field, `None` for every other kind
    pub fn computed(&self, values: &FormValues) -> Option<f64> {
        match self.kind {
            FieldKind::Result { compute } => Some(compute(values)),
            _ => None,
        }
    }

    /// Validate this field's raw value
    pub fn validate(&self, values: &FormValues) -> Result<(), String> {
        let rules = &self.validation;
        match self.kind {
            FieldKind::Text | FieldKind::TextArea => {
                rules.validate_string(values.get(self.key), self.label)
            }
            FieldKind::Number { .. } => {
                if values.is_blank(self.key) {
                    if rules.is_required() {
                        return Err(format!("{} es obligatorio", self.label));
                    }
                    return Ok(());
                }
                let value = values
                    .parse_number(self.key)
                    .ok_or_else(|| format!("{} debe ser un número", self.label))?;
                rules.validate_number(value, self.label)
            }
            FieldKind::Date => {
                if values.is_blank(self.key) {
                    if rules.is_required() {
                        return Err(format!("{} es obligatorio", self.label));
                    }
                    return Ok(());
                }
                values
                    .date(self.key)
                    .map(|_| ())
                    .ok_or_else(|| format!("{} debe ser una fecha válida", self.label))
            }
            FieldKind::Select { .. } => {
                if rules.is_required() && values.id(self.key).is_none() {
                    return Err(format!("Debe seleccionar {}", self.label));
                }
                Ok(())
            }
            FieldKind::Checkbox | FieldKind::Result { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doble(values: &FormValues) -> f64 {
        values.number("x") * 2.0
    }

    #[test]
    fn test_number_field() {
        let field = FieldDescriptor::number("x", "Kilómetros", 1.0).required().min(0.0);
        assert!(field.validate(&FormValues::new().with("x", "12")).is_ok());
        assert_eq!(
            field.validate(&FormValues::new()).unwrap_err(),
            "Kilómetros es obligatorio"
        );
        assert_eq!(
            field.validate(&FormValues::new().with("x", "doce")).unwrap_err(),
            "Kilómetros debe ser un número"
        );
        assert!(field.validate(&FormValues::new().with("x", "-3")).is_err());
    }

    #[test]
    fn test_optional_number_may_be_blank() {
        let field = FieldDescriptor::number("x", "Capacidad", 1.0).min(0.0);
        assert!(field.validate(&FormValues::new()).is_ok());
    }

    #[test]
    fn test_select_field() {
        let field = FieldDescriptor::select("zona_id", "Zona", "zonas").required();
        assert!(field.validate(&FormValues::new().with("zona_id", "2")).is_ok());
        assert_eq!(
            field.validate(&FormValues::new().with("zona_id", "")).unwrap_err(),
            "Debe seleccionar Zona"
        );
    }

    #[test]
    fn test_date_field() {
        let field = FieldDescriptor::date("fecha", "Fecha").required();
        assert!(field.validate(&FormValues::new().with("fecha", "2024-02-29")).is_ok());
        assert!(field.validate(&FormValues::new().with("fecha", "2023-02-29")).is_err());
    }

    #[test]
    fn test_result_field() {
        let field = FieldDescriptor::result("y", "Doble", doble);
        let values = FormValues::new().with("x", "21");
        assert!(!field.is_editable());
        assert_eq!(field.computed(&values), Some(42.0));
        assert!(field.validate(&values).is_ok());
        assert_eq!(FieldDescriptor::text("n", "Nombre").computed(&values), None);
    }
}
