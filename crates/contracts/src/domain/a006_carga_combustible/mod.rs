pub mod aggregate;

pub use aggregate::CargaCombustible;
