use crate::domain::common::validation::require_text;
use crate::domain::common::CatalogEntity;
use crate::shared::form::{FieldDescriptor, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

/// Transportista: carrier company quoting tariffs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportista {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    /// CUIT (tax id), 11 digits, stored without separators
    pub cuit: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for Transportista {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            cuit: String::new(),
            telefono: None,
            email: None,
            activo: true,
        }
    }
}

/// Strip the usual `20-12345678-6` separators
pub fn normalize_cuit(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | ' ' | '.'))
        .collect()
}

fn cuit_check_digit_ok(digits: &[u32]) -> bool {
    const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();
    let expected = match 11 - (sum % 11) {
        11 => 0,
        10 => return false,
        n => n,
    };
    digits[10] == expected
}

impl Transportista {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.nombre, "Nombre")?;

        let cuit = normalize_cuit(&self.cuit);
        let digits: Vec<u32> = cuit.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != 11 || cuit.len() != 11 {
            return Err("El CUIT debe tener 11 dígitos".into());
        }
        if !cuit_check_digit_ok(&digits) {
            return Err("El dígito verificador del CUIT no es válido".into());
        }

        if let Some(email) = &self.email {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err("El email no es válido".into());
            }
        }
        Ok(())
    }
}

impl CatalogEntity for Transportista {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn is_active(&self) -> bool {
        self.activo
    }

    fn set_active(&mut self, active: bool) {
        self.activo = active;
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "transportistas"
    }

    fn element_name() -> &'static str {
        "Transportista"
    }

    fn list_name() -> &'static str {
        "Transportistas"
    }
}

impl FormSchema for Transportista {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("nombre", "Nombre")
                .required()
                .max_length(120)
                .placeholder("Razón social"),
            FieldDescriptor::text("cuit", "CUIT")
                .required()
                .placeholder("20-12345678-6"),
            FieldDescriptor::text("telefono", "Teléfono"),
            FieldDescriptor::text("email", "Email").placeholder("contacto@empresa.com"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("nombre", self.nombre.clone())
            .with("cuit", self.cuit.clone())
            .with("telefono", self.telefono.clone().unwrap_or_default())
            .with("email", self.email.clone().unwrap_or_default())
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            nombre: values.text("nombre"),
            cuit: normalize_cuit(values.get("cuit")),
            telefono: values.opt_text("telefono"),
            email: values.opt_text("email"),
            ..base.clone()
        }
    }

    fn check(&self) -> Result<(), String> {
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transportista {
        Transportista {
            id: Some(1),
            nombre: "Expreso Sur".into(),
            cuit: "20123456786".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_cuit() {
        assert!(sample().validate().is_ok());
        let mut t = sample();
        t.cuit = "30712345671".into();
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_invalid_cuit() {
        let mut t = sample();
        t.cuit = "20123456787".into();
        assert_eq!(
            t.validate().unwrap_err(),
            "El dígito verificador del CUIT no es válido"
        );
        t.cuit = "2012345678".into();
        assert_eq!(t.validate().unwrap_err(), "El CUIT debe tener 11 dígitos");
        t.cuit = "2012345678a".into();
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_email_check() {
        let mut t = sample();
        t.email = Some("sin-arroba".into());
        assert!(t.validate().is_err());
        t.email = Some("ops@expresosur.com.ar".into());
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_form_round_trip_keeps_identity() {
        let base = sample();
        let values = base
            .to_values()
            .with("cuit", "20-12345678-6")
            .with("telefono", " ");
        let edited = Transportista::submit(&base, &values).unwrap();
        assert_eq!(edited.id, Some(1));
        assert_eq!(edited.cuit, "20123456786");
        assert_eq!(edited.telefono, None);
        assert!(edited.activo);
    }

    #[test]
    fn test_submit_reports_missing_fields() {
        let errors =
            Transportista::submit(&Transportista::default(), &FormValues::new()).unwrap_err();
        let keys: Vec<_> = errors.iter().filter_map(|e| e.key).collect();
        assert_eq!(keys, vec!["nombre", "cuit"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let t: Transportista =
            serde_json::from_str(r#"{"id":5,"nombre":"Andes","cuit":"20123456786"}"#).unwrap();
        assert!(t.activo);
        assert_eq!(t.email, None);
        assert_eq!(Transportista::full_name(), "a001_transportistas");
    }
}
