use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fuel load row of `GET /api/reportes/combustible`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargaCombustibleDetalle {
    pub id: i64,
    pub fecha: NaiveDate,
    pub transportista_id: i64,
    pub transportista: String,
    pub tipo_vehiculo_id: i64,
    pub tipo_vehiculo: String,
    pub litros: f64,
    pub kilometros: f64,
    pub precio_litro: f64,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl CargaCombustibleDetalle {
    pub fn costo_total(&self) -> f64 {
        self.litros * self.precio_litro
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agrupacion {
    #[default]
    TipoVehiculo,
    Transportista,
}

impl Agrupacion {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TipoVehiculo => "Tipo de vehículo",
            Self::Transportista => "Transportista",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::TipoVehiculo => "tipo_vehiculo",
            Self::Transportista => "transportista",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "transportista" => Self::Transportista,
            _ => Self::TipoVehiculo,
        }
    }
}

/// Consumption of one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendimiento {
    pub id: i64,
    pub nombre: String,
    pub cargas: usize,
    pub litros: f64,
    pub kilometros: f64,
    pub costo: f64,
    /// `None` without litres
    pub km_por_litro: Option<f64>,
    /// `None` without kilometres
    pub costo_por_km: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumenCombustible {
    pub cargas: usize,
    pub litros: f64,
    pub kilometros: f64,
    pub costo: f64,
    pub km_por_litro: Option<f64>,
    /// Group with the highest km/l
    pub mejor: Option<Rendimiento>,
    /// Group with the lowest km/l
    pub peor: Option<Rendimiento>,
}
