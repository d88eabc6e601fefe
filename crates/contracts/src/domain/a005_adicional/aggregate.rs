use crate::domain::common::validation::{require_non_negative, require_text};
use crate::domain::common::CatalogEntity;
use crate::shared::form::{number_text, FieldDescriptor, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

/// Surcharge line item (peaje, carga/descarga, seguro...).
///
/// `es_global` marks a floating surcharge created ad-hoc from a tariff with a
/// price set per use. Promoting it clears the flag and makes it part of the
/// reusable catalog offered in the tariff editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adicional {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    /// Price suggested when the surcharge is added to a tariff
    #[serde(default)]
    pub costo_default: f64,
    #[serde(default)]
    pub es_global: bool,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for Adicional {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            costo_default: 0.0,
            es_global: false,
            descripcion: None,
            activo: true,
        }
    }
}

impl Adicional {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.nombre, "Nombre")?;
        require_non_negative(self.costo_default, "El costo")
    }

    /// Offered in the tariff editor catalog
    pub fn in_catalog(&self) -> bool {
        self.activo && !self.es_global
    }

    /// Promote a floating surcharge into the reusable catalog
    pub fn promote(&mut self) {
        self.es_global = false;
    }

    pub fn kind_label(&self) -> &'static str {
        if self.es_global {
            "Global"
        } else {
            "Catálogo"
        }
    }
}

impl CatalogEntity for Adicional {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "adicionales"
    }

    fn element_name() -> &'static str {
        "Adicional"
    }

    fn list_name() -> &'static str {
        "Adicionales"
    }
}

impl FormSchema for Adicional {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("nombre", "Nombre").required().max_length(80),
            FieldDescriptor::number("costo_default", "Costo sugerido", 0.01)
                .required()
                .min(0.0),
            FieldDescriptor::text_area("descripcion", "Descripción"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("nombre", self.nombre.clone())
            .with("costo_default", number_text(self.costo_default))
            .with("descripcion", self.descripcion.clone().unwrap_or_default())
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            nombre: values.text("nombre"),
            costo_default: values.number("costo_default"),
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
    fn test_promote() {
        let mut a = Adicional {
            id: Some(9),
            nombre: "Espera en planta".into(),
            costo_default: 15000.0,
            es_global: true,
            ..Default::default()
        };
        assert!(!a.in_catalog());
        assert_eq!(a.kind_label(), "Global");
        a.promote();
        assert!(a.in_catalog());
        assert_eq!(a.kind_label(), "Catálogo");
    }

    #[test]
    fn test_inactive_not_in_catalog() {
        let a = Adicional {
            nombre: "Peaje".into(),
            activo: false,
            ..Default::default()
        };
        assert!(!a.in_catalog());
    }

    #[test]
    fn test_form_keeps_global_flag() {
        let base = Adicional {
            id: Some(4),
            nombre: "Seguro".into(),
            es_global: true,
            ..Default::default()
        };
        let edited = Adicional::submit(&base, &base.to_values().with("costo_default", "2500")).unwrap();
        assert!(edited.es_global);
        assert_eq!(edited.costo_default, 2500.0);
    }
}
