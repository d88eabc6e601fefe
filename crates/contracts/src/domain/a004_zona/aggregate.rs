use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::CatalogEntity;
use crate::shared::form::{number_text, FieldDescriptor, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

/// Travel zone used to compare tariff costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zona {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    /// Reference distance from the depot
    #[serde(default)]
    pub distancia_km: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for Zona {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            distancia_km: 0.0,
            descripcion: None,
            activo: true,
        }
    }
}

impl Zona {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.nombre, "Nombre")?;
        require_non_negative(self.distancia_km, "La distancia")
    }
}

impl CatalogEntity for Zona {
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
        "a004"
    }

    fn collection_name() -> &'static str {
        "zonas"
    }

    fn element_name() -> &'static str {
        "Zona"
    }

    fn list_name() -> &'static str {
        "Zonas"
    }
}

impl FormSchema for Zona {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("nombre", "Nombre").required().max_length(80),
            FieldDescriptor::number("distancia_km", "Distancia (km)", 1.0)
                .required()
                .min(0.0),
            FieldDescriptor::text_area("descripcion", "Descripción"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("nombre", self.nombre.clone())
            .with("distancia_km", number_text(self.distancia_km))
            .with("descripcion", self.descripcion.clone().unwrap_or_default())
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            nombre: values.text("nombre"),
            distancia_km: values.number("distancia_km"),
            descripcion: values.opt_text("descripcion"),
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

    #[test]
    fn test_submit_rejects_negative_distance() {
        let values = FormValues::new()
            .with("nombre", "AMBA")
            .with("distancia_km", "-10");
        let errors = Zona::submit(&Zona::default(), &values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, Some("distancia_km"));
    }

    #[test]
    fn test_submit_new_zone() {
        let values = FormValues::new()
            .with("nombre", " Cuyo ")
            .with("distancia_km", "1050");
        let zona = Zona::submit(&Zona::default(), &values).unwrap();
        assert_eq!(zona.nombre, "Cuyo");
        assert_eq!(zona.distancia_km, 1050.0);
        assert_eq!(zona.id, None);
        assert!(zona.activo);
    }
}
