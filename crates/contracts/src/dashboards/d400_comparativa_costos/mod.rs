pub mod compute;
pub mod dto;

pub use compute::{compare_by_zone, ranking_for_zone, summary};
pub use dto::{ComparativaFilter, ResumenTarifas, TarifaDetalle, ZonaComparativa};
