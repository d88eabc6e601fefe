pub mod aggregate;

pub use aggregate::{normalize_cuit, Transportista};
