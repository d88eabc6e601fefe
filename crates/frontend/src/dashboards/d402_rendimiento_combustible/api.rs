use crate::shared::api_client::get_json;
use crate::shared::api_utils::{api_url, query_string};
use chrono::NaiveDate;
use contracts::dashboards::d402_rendimiento_combustible::CargaCombustibleDetalle;

fn combustible_path(desde: Option<NaiveDate>, hasta: Option<NaiveDate>) -> String {
    let query = query_string(&[
        ("desde", desde.map(|d| d.format("%Y-%m-%d").to_string())),
        ("hasta", hasta.map(|d| d.format("%Y-%m-%d").to_string())),
    ]);
    format!("/api/reportes/combustible{}", query)
}

/// Fuel loads with resolved names, optionally bounded by date on the server
pub async fn cargas(
    desde: Option<NaiveDate>,
    hasta: Option<NaiveDate>,
    force: bool,
) -> Result<Vec<CargaCombustibleDetalle>, String> {
    get_json(&api_url(&combustible_path(desde, hasta)), force).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combustible_path() {
        let desde = NaiveDate::from_ymd_opt(2024, 5, 1);
        let hasta = NaiveDate::from_ymd_opt(2024, 5, 31);
        assert_eq!(combustible_path(None, None), "/api/reportes/combustible");
        assert_eq!(combustible_path(desde, None), "/api/reportes/combustible?desde=2024-05-01");
        assert_eq!(
            combustible_path(desde, hasta),
            "/api/reportes/combustible?desde=2024-05-01&hasta=2024-05-31"
        );
    }
}
