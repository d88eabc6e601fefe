use serde::{Deserialize, Serialize};

/// What the tariffs are counted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Transportista,
    TipoVehiculo,
    Zona,
    TipoCarga,
    Adicional,
}

impl Dimension {
    pub fn all() -> [Dimension; 5] {
        [
            Self::Transportista,
            Self::TipoVehiculo,
            Self::Zona,
            Self::TipoCarga,
            Self::Adicional,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Transportista => "Transportista",
            Self::TipoVehiculo => "Tipo de vehículo",
            Self::Zona => "Zona",
            Self::TipoCarga => "Tipo de carga",
            Self::Adicional => "Adicional",
        }
    }

    /// Stable key for `<select>` values
    pub fn key(&self) -> &'static str {
        match self {
            Self::Transportista => "transportista",
            Self::TipoVehiculo => "tipo_vehiculo",
            Self::Zona => "zona",
            Self::TipoCarga => "tipo_carga",
            Self::Adicional => "adicional",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.key() == key)
    }
}

/// How many active tariffs use one value of the dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frecuencia {
    pub nombre: String,
    pub cantidad: usize,
    /// Share of the dimension total, 0..=100
    pub porcentaje: f64,
}
