pub mod common;

pub mod a001_transportista;
pub mod a002_tipo_vehiculo;
pub mod a003_tipo_carga;
pub mod a004_zona;
pub mod a005_adicional;
pub mod a006_carga_combustible;
pub mod a007_tarifa;
