pub mod compute;
pub mod dto;

pub use compute::{frequency, total_count};
pub use dto::{Dimension, Frecuencia};
