pub mod aggregate;

pub use aggregate::TipoCarga;
