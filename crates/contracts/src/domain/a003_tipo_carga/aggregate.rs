use crate::domain::common::validation::require_text;
use crate::domain::common::CatalogEntity;
use crate::shared::form::{flag_text, FieldDescriptor, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

/// Cargo type (general, refrigerada, peligrosa...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoCarga {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub requiere_refrigeracion: bool,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for TipoCarga {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            descripcion: None,
            requiere_refrigeracion: false,
            activo: true,
        }
    }
}

impl TipoCarga {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.nombre, "Nombre")
    }
}

impl CatalogEntity for TipoCarga {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "tipos-carga"
    }

    fn element_name() -> &'static str {
        "Tipo de carga"
    }

    fn list_name() -> &'static str {
        "Tipos de carga"
    }
}

impl FormSchema for TipoCarga {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("nombre", "Nombre").required().max_length(80),
            FieldDescriptor::text_area("descripcion", "Descripción"),
            FieldDescriptor::checkbox("requiere_refrigeracion", "Requiere refrigeración"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("nombre", self.nombre.clone())
            .with("descripcion", self.descripcion.clone().unwrap_or_default())
            .with("requiere_refrigeracion", flag_text(self.requiere_refrigeracion))
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            nombre: values.text("nombre"),
            descripcion: values.opt_text("descripcion"),
            requiere_refrigeracion: values.flag("requiere_refrigeracion"),
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
    fn test_checkbox_mapping() {
        let base = TipoCarga {
            id: Some(2),
            nombre: "Perecederos".into(),
            ..Default::default()
        };
        let values = base.to_values().with("requiere_refrigeracion", "true");
        let edited = TipoCarga::submit(&base, &values).unwrap();
        assert!(edited.requiere_refrigeracion);
        assert_eq!(edited.descripcion, None);
    }
}
