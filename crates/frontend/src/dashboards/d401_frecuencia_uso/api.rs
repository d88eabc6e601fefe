pub use crate::dashboards::d400_comparativa_costos::api::tarifas;
