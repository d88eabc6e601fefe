pub mod aggregate;

pub use aggregate::Zona;
