pub mod compute;
pub mod dto;

pub use compute::{efficiency, fuel_summary, in_range};
pub use dto::{Agrupacion, CargaCombustibleDetalle, Rendimiento, ResumenCombustible};
