use crate::domain::common::validation::{require_non_negative, require_positive, require_reference};
use crate::domain::common::CatalogEntity;
use crate::shared::form::{date_text, id_text, number_text, FieldDescriptor, FormSchema, FormValues};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fuel load registered for a carrier's vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargaCombustible {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub transportista_id: i64,
    pub tipo_vehiculo_id: i64,
    pub fecha: NaiveDate,
    pub litros: f64,
    /// Kilometres driven since the previous load
    pub kilometros: f64,
    pub precio_litro: f64,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl Default for CargaCombustible {
    fn default() -> Self {
        Self {
            id: None,
            transportista_id: 0,
            tipo_vehiculo_id: 0,
            fecha: NaiveDate::default(),
            litros: 0.0,
            kilometros: 0.0,
            precio_litro: 0.0,
            activo: true,
        }
    }
}

fn costo_total_field(values: &FormValues) -> f64 {
    values.number("litros") * values.number("precio_litro")
}

fn rendimiento_field(values: &FormValues) -> f64 {
    let litros = values.number("litros");
    if litros > 0.0 {
        values.number("kilometros") / litros
    } else {
        0.0
    }
}

impl CargaCombustible {
    /// New load dated `fecha`
    pub fn on(fecha: NaiveDate) -> Self {
        Self {
            fecha,
            ..Default::default()
        }
    }

    pub fn costo_total(&self) -> f64 {
        self.litros * self.precio_litro
    }

    /// Kilometres per litre, `None` without litres
    pub fn rendimiento_km_l(&self) -> Option<f64> {
        if self.litros > 0.0 {
            Some(self.kilometros / self.litros)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_reference(self.transportista_id, "un transportista")?;
        require_reference(self.tipo_vehiculo_id, "un tipo de vehículo")?;
        require_positive(self.litros, "Los litros")?;
        require_non_negative(self.kilometros, "Los kilómetros")?;
        require_non_negative(self.precio_litro, "El precio por litro")?;
        Ok(())
    }
}

impl CatalogEntity for CargaCombustible {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Carga del {} ({:.0} l)", self.fecha.format("%d/%m/%Y"), self.litros)
    }

    fn is_active(&self) -> bool {
        self.activo
    }

    fn set_active(&mut self, active: bool) {
        self.activo = active;
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "cargas-combustible"
    }

    fn element_name() -> &'static str {
        "Carga de combustible"
    }

    fn list_name() -> &'static str {
        "Cargas de combustible"
    }
}

impl FormSchema for CargaCombustible {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::select("transportista_id", "Transportista", "transportistas").required(),
            FieldDescriptor::select("tipo_vehiculo_id", "Tipo de vehículo", "tipos-vehiculo")
                .required(),
            FieldDescriptor::date("fecha", "Fecha").required(),
            FieldDescriptor::number("litros", "Litros", 0.01).required().min(0.01),
            FieldDescriptor::number("kilometros", "Kilómetros recorridos", 1.0)
                .required()
                .min(0.0),
            FieldDescriptor::number("precio_litro", "Precio por litro", 0.01)
                .required()
                .min(0.0),
            FieldDescriptor::result("costo_total", "Costo total", costo_total_field),
            FieldDescriptor::result("rendimiento", "Rendimiento (km/l)", rendimiento_field),
        ]
    }

    fn to_values(&self) -> FormValues {
        let as_id = |id: i64| id_text(if id > 0 { Some(id) } else { None });
        let as_number = |v: f64| if self.id.is_none() && v == 0.0 { String::new() } else { number_text(v) };
        FormValues::new()
            .with("transportista_id", as_id(self.transportista_id))
            .with("tipo_vehiculo_id", as_id(self.tipo_vehiculo_id))
            .with("fecha", date_text(Some(self.fecha)))
            .with("litros", as_number(self.litros))
            .with("kilometros", as_number(self.kilometros))
            .with("precio_litro", as_number(self.precio_litro))
    }

    fn from_values(base: &Self, values: &FormValues) -> Self {
        Self {
            transportista_id: values.id("transportista_id").unwrap_or(0),
            tipo_vehiculo_id: values.id("tipo_vehiculo_id").unwrap_or(0),
            fecha: values.date("fecha").unwrap_or(base.fecha),
            litros: values.number("litros"),
            kilometros: values.number("kilometros"),
            precio_litro: values.number("precio_litro"),
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

    fn sample() -> CargaCombustible {
        CargaCombustible {
            id: Some(1),
            transportista_id: 2,
            tipo_vehiculo_id: 3,
            fecha: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            litros: 200.0,
            kilometros: 700.0,
            precio_litro: 1100.0,
            activo: true,
        }
    }

    #[test]
    fn test_costs() {
        let c = sample();
        assert_eq!(c.costo_total(), 220000.0);
        assert_eq!(c.rendimiento_km_l(), Some(3.5));
        let empty = CargaCombustible::default();
        assert_eq!(empty.rendimiento_km_l(), None);
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        let mut c = sample();
        c.litros = 0.0;
        assert!(c.validate().is_err());
        let mut c = sample();
        c.transportista_id = 0;
        assert_eq!(c.validate().unwrap_err(), "Debe seleccionar un transportista");
    }

    #[test]
    fn test_result_fields_follow_values() {
        let values = sample().to_values();
        let fields = CargaCombustible::fields();
        let costo = fields.iter().find(|f| f.key == "costo_total").unwrap();
        let rendimiento = fields.iter().find(|f| f.key == "rendimiento").unwrap();
        assert_eq!(costo.computed(&values), Some(220000.0));
        assert_eq!(rendimiento.computed(&values), Some(3.5));
        let blank = FormValues::new();
        assert_eq!(rendimiento.computed(&blank), Some(0.0));
    }

    #[test]
    fn test_new_load_starts_blank() {
        let nueva = CargaCombustible::on(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        let values = nueva.to_values();
        assert_eq!(values.get("fecha"), "2024-07-10");
        assert_eq!(values.get("litros"), "");
        assert_eq!(values.get("transportista_id"), "");
    }

    #[test]
    fn test_submit() {
        let base = CargaCombustible::on(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
        let values = base
            .to_values()
            .with("transportista_id", "2")
            .with("tipo_vehiculo_id", "3")
            .with("litros", "150")
            .with("kilometros", "450")
            .with("precio_litro", "1000");
        let carga = CargaCombustible::submit(&base, &values).unwrap();
        assert_eq!(carga.costo_total(), 150000.0);
        assert_eq!(carga.fecha, NaiveDate::from_ymd_opt(2024, 7, 10).unwrap());
    }
}
