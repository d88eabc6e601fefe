pub mod aggregate;

pub use aggregate::TipoVehiculo;
