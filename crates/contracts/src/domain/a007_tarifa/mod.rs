pub mod aggregate;

pub use aggregate::{find_duplicate, Tarifa, TarifaAdicional, TOTAL_ADICIONALES_KEY};
