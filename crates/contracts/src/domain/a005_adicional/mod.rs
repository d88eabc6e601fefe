pub mod aggregate;

pub use aggregate::Adicional;
