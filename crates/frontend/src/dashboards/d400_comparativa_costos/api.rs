use crate::shared::api_client::get_json;
use crate::shared::api_utils::api_url;
use contracts::dashboards::d400_comparativa_costos::TarifaDetalle;

pub const TARIFAS_REPORT_PATH: &str = "/api/reportes/tarifas";

/// Tariffs with resolved names, shared by the cost and frequency reports
pub async fn tarifas(force: bool) -> Result<Vec<TarifaDetalle>, String> {
    get_json(&api_url(TARIFAS_REPORT_PATH), force).await
}
