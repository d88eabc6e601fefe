use crate::domain::a005_adicional::Adicional;
use crate::domain::common::validation::{require_non_negative, require_reference, require_text};
use crate::domain::common::CatalogEntity;
use crate::shared::form::{date_text, id_text, number_text, FieldDescriptor, FormSchema, FormValues};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Hidden form key carrying the sum of the surcharge lines, kept up to date
/// by the tariff editor so the `total` result field can read it.
pub const TOTAL_ADICIONALES_KEY: &str = "total_adicionales";

/// Surcharge applied to one tariff.
///
/// `adicional_id == None` is an ad-hoc line typed in the editor; the backend
/// stores it as a global (floating) [`Adicional`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TarifaAdicional {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adicional_id: Option<i64>,
    pub nombre: String,
    pub costo: f64,
}

impl TarifaAdicional {
    /// Line picked from the catalog, priced at its suggested cost
    pub fn from_catalog(adicional: &Adicional) -> Self {
        Self {
            adicional_id: adicional.id,
            nombre: adicional.nombre.clone(),
            costo: adicional.costo_default,
        }
    }

    pub fn ad_hoc(nombre: impl Into<String>, costo: f64) -> Self {
        Self {
            adicional_id: None,
            nombre: nombre.into(),
            costo,
        }
    }

    pub fn is_ad_hoc(&self) -> bool {
        self.adicional_id.is_none()
    }
}

/// Tarifa: price of a carrier for a vehicle type, zone and cargo type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarifa {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub transportista_id: i64,
    pub tipo_vehiculo_id: i64,
    pub zona_id: i64,
    pub tipo_carga_id: i64,
    pub costo_base: f64,
    #[serde(default)]
    pub adicionales: Vec<TarifaAdicional>,
    #[serde(default)]
    pub vigencia_desde: Option<NaiveDate>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for Tarifa {
    fn default() -> Self {
        Self {
            id: None,
            transportista_id: 0,
            tipo_vehiculo_id: 0,
            zona_id: 0,
            tipo_carga_id: 0,
            costo_base: 0.0,
            adicionales: Vec::new(),
            vigencia_desde: None,
            activo: true,
        }
    }
}

fn total_field(values: &FormValues) -> f64 {
    values.number("costo_base") + values.number(TOTAL_ADICIONALES_KEY)
}

impl Tarifa {
    pub fn total_adicionales(&self) -> f64 {
        self.adicionales.iter().map(|a| a.costo).sum()
    }

    /// Base cost plus every surcharge line
    pub fn total(&self) -> f64 {
        self.costo_base + self.total_adicionales()
    }

    /// Same carrier, vehicle type, zone and cargo type
    pub fn same_combination(&self, other: &Tarifa) -> bool {
        self.transportista_id == other.transportista_id
            && self.tipo_vehiculo_id == other.tipo_vehiculo_id
            && self.zona_id == other.zona_id
            && self.tipo_carga_id == other.tipo_carga_id
    }

    pub fn has_adicional(&self, adicional_id: i64) -> bool {
        self.adicionales
            .iter()
            .any(|a| a.adicional_id == Some(adicional_id))
    }

    pub fn validate(&self) -> Result<(), String> {
        require_reference(self.transportista_id, "un transportista")?;
        require_reference(self.tipo_vehiculo_id, "un tipo de vehículo")?;
        require_reference(self.zona_id, "una zona")?;
        require_reference(self.tipo_carga_id, "un tipo de carga")?;
        require_non_negative(self.costo_base, "El costo base")?;

        let mut seen = HashSet::new();
        for linea in &self.adicionales {
            require_text(&linea.nombre, "El nombre del adicional")?;
            require_non_negative(linea.costo, &format!("El costo de '{}'", linea.nombre))?;
            if let Some(id) = linea.adicional_id {
                if !seen.insert(id) {
                    return Err(format!("El adicional '{}' está repetido", linea.nombre));
                }
            }
        }
        Ok(())
    }
}

/// Another active tariff with the same combination, if any.
///
/// `candidate` itself is skipped by id so editing a tariff never collides
/// with its stored version.
pub fn find_duplicate<'a>(existing: &'a [Tarifa], candidate: &Tarifa) -> Option<&'a Tarifa> {
    existing.iter().find(|t| {
        t.activo
            && t.same_combination(candidate)
            && (candidate.id.is_none() || t.id != candidate.id)
    })
}

impl CatalogEntity for Tarifa {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> String {
        match self.id {
            Some(id) => format!("Tarifa #{}", id),
            None => "Tarifa nueva".to_string(),
        }
    }

    fn is_active(&self) -> bool {
        self.activo
    }

    fn set_active(&mut self, active: bool) {
        self.activo = active;
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "tarifas"
    }

    fn element_name() -> &'static str {
        "Tarifa"
    }

    fn list_name() -> &'static str {
        "Tarifas"
    }
}

/// Scalar part of the tariff; the surcharge lines are edited beside the form
/// and travel on `base`.
impl FormSchema for Tarifa {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::select("transportista_id", "Transportista", "transportistas").required(),
            FieldDescriptor::select("tipo_vehiculo_id", "Tipo de vehículo", "tipos-vehiculo")
                .required(),
            FieldDescriptor::select("zona_id", "Zona", "zonas").required(),
            FieldDescriptor::select("tipo_carga_id", "Tipo de carga", "tipos-carga").required(),
            FieldDescriptor::number("costo_base", "Costo base", 0.01)
                .required()
                .min(0.0),
            FieldDescriptor::date("vigencia_desde", "Vigente desde"),
            FieldDescriptor::result("total", "Total", total_field),
        ]
    }

    fn to_values(&self) -> FormValues {
        let as_id = |id: i64| id_text(if id > 0 { Some(id) } else { None });
        let costo_base = if self.id.is_none() && self.costo_base == 0.0 {
            String::new()
        } else {
            number_text(self.costo_base)
        };
        FormValues::new()
            .with("transportista_id", as_id(self.transportista_id))
            .with("tipo_vehiculo_id", as_id(self.tipo_vehiculo_id))
            .with("zona_id", as_id(self.zona_id))
            .with("tipo_carga_id", as_id(self.tipo_carga_id))
            .with("costo_base", costo_base)
            .with("vigencia_desde", date_text(self.vigencia_desde))
            .with(TOTAL_ADICIONALES_KEY, number_text(self.total_adicionales()))
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            transportista_id: values.id("transportista_id").unwrap_or(0),
            tipo_vehiculo_id: values.id("tipo_vehiculo_id").unwrap_or(0),
            zona_id: values.id("zona_id").unwrap_or(0),
            tipo_carga_id: values.id("tipo_carga_id").unwrap_or(0),
            costo_base: values.number("costo_base"),
            vigencia_desde: values.date("vigencia_desde"),
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

    fn tarifa(id: i64, zona_id: i64, costo_base: f64) -> Tarifa {
        Tarifa {
            id: Some(id),
            transportista_id: 1,
            tipo_vehiculo_id: 2,
            zona_id,
            tipo_carga_id: 3,
            costo_base,
            ..Default::default()
        }
    }

    #[test]
    fn test_total() {
        let mut t = tarifa(1, 1, 100000.0);
        assert_eq!(t.total(), 100000.0);
        t.adicionales.push(TarifaAdicional::ad_hoc("Peaje", 5000.0));
        t.adicionales.push(TarifaAdicional {
            adicional_id: Some(4),
            nombre: "Seguro".into(),
            costo: 2500.5,
        });
        assert_eq!(t.total_adicionales(), 7500.5);
        assert_eq!(t.total(), 107500.5);
        assert!(t.has_adicional(4));
        assert!(!t.has_adicional(5));
    }

    #[test]
    fn test_find_duplicate() {
        let existing = vec![tarifa(1, 1, 100.0), tarifa(2, 2, 200.0)];

        let mut nueva = tarifa(0, 1, 150.0);
        nueva.id = None;
        assert_eq!(find_duplicate(&existing, &nueva).and_then(|t| t.id), Some(1));

        // editing the stored tariff is not a duplicate of itself
        let editada = tarifa(1, 1, 120.0);
        assert!(find_duplicate(&existing, &editada).is_none());

        // moving tariff 2 onto zone 1 collides with tariff 1
        let movida = tarifa(2, 1, 200.0);
        assert_eq!(find_duplicate(&existing, &movida).and_then(|t| t.id), Some(1));
    }

    #[test]
    fn test_inactive_tariff_is_not_a_duplicate() {
        let mut baja = tarifa(1, 1, 100.0);
        baja.activo = false;
        let mut nueva = tarifa(0, 1, 150.0);
        nueva.id = None;
        assert!(find_duplicate(&[baja], &nueva).is_none());
    }

    #[test]
    fn test_validate_lines() {
        let mut t = tarifa(1, 1, 100.0);
        t.adicionales.push(TarifaAdicional::ad_hoc("  ", 10.0));
        assert!(t.validate().is_err());

        let mut t = tarifa(1, 1, 100.0);
        t.adicionales.push(TarifaAdicional::ad_hoc("Peaje", -1.0));
        assert_eq!(t.validate().unwrap_err(), "El costo de 'Peaje' no puede ser negativo");

        let adicional = Adicional {
            id: Some(7),
            nombre: "Descarga".into(),
            costo_default: 300.0,
            ..Default::default()
        };
        let mut t = tarifa(1, 1, 100.0);
        t.adicionales.push(TarifaAdicional::from_catalog(&adicional));
        t.adicionales.push(TarifaAdicional::from_catalog(&adicional));
        assert_eq!(t.validate().unwrap_err(), "El adicional 'Descarga' está repetido");
    }

    #[test]
    fn test_validate_missing_zone() {
        let t = tarifa(1, 0, 100.0);
        assert_eq!(t.validate().unwrap_err(), "Debe seleccionar una zona");
    }

    #[test]
    fn test_form_total_and_lines_kept() {
        let mut base = tarifa(5, 1, 1000.0);
        base.adicionales.push(TarifaAdicional::ad_hoc("Peaje", 250.0));

        let values = base.to_values().with("costo_base", "1200");
        let total = Tarifa::fields()
            .into_iter()
            .find(|f| f.key == "total")
            .and_then(|f| f.computed(&values));
        assert_eq!(total, Some(1450.0));

        let saved = Tarifa::submit(&base, &values).unwrap();
        assert_eq!(saved.costo_base, 1200.0);
        assert_eq!(saved.adicionales.len(), 1);
        assert_eq!(saved.total(), 1450.0);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"id":3,"transportista_id":1,"tipo_vehiculo_id":2,"zona_id":4,"tipo_carga_id":5,"costo_base":900.0}"#;
        let t: Tarifa = serde_json::from_str(json).unwrap();
        assert!(t.activo);
        assert!(t.adicionales.is_empty());
        assert_eq!(t.vigencia_desde, None);
    }
}
