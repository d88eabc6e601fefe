use crate::domain::a007_tarifa::TarifaAdicional;
use serde::{Deserialize, Serialize};

/// Tariff row of `GET /api/reportes/tarifas`, names already resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarifaDetalle {
    pub id: i64,
    pub transportista_id: i64,
    pub transportista: String,
    pub tipo_vehiculo_id: i64,
    pub tipo_vehiculo: String,
    pub zona_id: i64,
    pub zona: String,
    pub tipo_carga_id: i64,
    pub tipo_carga: String,
    pub costo_base: f64,
    #[serde(default)]
    pub adicionales: Vec<TarifaAdicional>,
    #[serde(default = "crate::domain::common::default_active")]
    pub activo: bool,
}

impl TarifaDetalle {
    pub fn total(&self) -> f64 {
        self.costo_base + self.adicionales.iter().map(|a| a.costo).sum::<f64>()
    }
}

/// Optional narrowing of the comparison; `None` means all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparativaFilter {
    pub tipo_vehiculo_id: Option<i64>,
    pub tipo_carga_id: Option<i64>,
}

impl ComparativaFilter {
    pub fn matches(&self, row: &TarifaDetalle) -> bool {
        row.activo
            && self.tipo_vehiculo_id.map_or(true, |id| row.tipo_vehiculo_id == id)
            && self.tipo_carga_id.map_or(true, |id| row.tipo_carga_id == id)
    }
}

/// Cost spread of the tariffs of one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonaComparativa {
    pub zona_id: i64,
    pub zona: String,
    pub cantidad: usize,
    pub minimo: f64,
    pub maximo: f64,
    pub promedio: f64,
    /// Carrier quoting `minimo`
    pub mas_barato: String,
}

impl ZonaComparativa {
    /// Difference between the most expensive and the cheapest quote
    pub fn diferencia(&self) -> f64 {
        self.maximo - self.minimo
    }
}

/// Headline KPIs of the comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumenTarifas {
    pub cantidad: usize,
    pub zonas: usize,
    pub minimo: Option<f64>,
    pub maximo: Option<f64>,
    pub promedio: Option<f64>,
}
