use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::CatalogEntity;
use crate::shared::form::{number_text, FieldDescriptor, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

/// Vehicle type (semi, chasis, utilitario...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoVehiculo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    /// Payload capacity in kilograms
    #[serde(default)]
    pub capacidad_kg: f64,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for TipoVehiculo {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            capacidad_kg: 0.0,
            descripcion: None,
            activo: true,
        }
    }
}

impl TipoVehiculo {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.nombre, "Nombre")?;
        require_non_negative(self.capacidad_kg, "La capacidad")?;
        Ok(())
    }
}

impl CatalogEntity for TipoVehiculo {
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "tipos-vehiculo"
    }

    fn element_name() -> &'static str {
        "Tipo de vehículo"
    }

    fn list_name() -> &'static str {
        "Tipos de vehículo"
    }
}

impl FormSchema for TipoVehiculo {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("nombre", "Nombre").required().max_length(80),
            FieldDescriptor::number("capacidad_kg", "Capacidad (kg)", 100.0).min(0.0),
            FieldDescriptor::text_area("descripcion", "Descripción"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("nombre", self.nombre.clone())
            .with("capacidad_kg", number_text(self.capacidad_kg))
            .with("descripcion", self.descripcion.clone().unwrap_or_default())
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            nombre: values.text("nombre"),
            capacidad_kg: values.number("capacidad_kg"),
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
    fn test_validate() {
        let mut v = TipoVehiculo {
            nombre: "Semirremolque".into(),
            capacidad_kg: 28000.0,
            ..Default::default()
        };
        assert!(v.validate().is_ok());
        v.capacidad_kg = -1.0;
        assert!(v.validate().is_err());
        v.capacidad_kg = 0.0;
        v.nombre = " ".into();
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_full_name_is_a_tab_key() {
        assert_eq!(TipoVehiculo::full_name(), "a002_tipos_vehiculo");
    }

    #[test]
    fn test_form_values() {
        let v = TipoVehiculo {
            id: Some(3),
            nombre: "Chasis".into(),
            capacidad_kg: 12000.0,
            ..Default::default()
        };
        let values = v.to_values();
        assert_eq!(values.get("capacidad_kg"), "12000");
        let edited =
            TipoVehiculo::submit(&v, &values.with("capacidad_kg", "12500,5")).unwrap();
        assert_eq!(edited.capacidad_kg, 12500.5);
        assert_eq!(edited.id, Some(3));
    }
}
