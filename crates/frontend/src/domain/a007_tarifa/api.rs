use crate::shared::api_client::{get_json, CrudApi};
use crate::shared::api_utils::{api_url, query_string};
use contracts::domain::a007_tarifa::Tarifa;

pub fn api() -> CrudApi<Tarifa> {
    CrudApi::new()
}

fn by_transportista_path(transportista_id: i64) -> String {
    format!(
        "{}{}",
        CrudApi::<Tarifa>::collection_path(),
        query_string(&[("transportista_id", Some(transportista_id.to_string()))])
    )
}

/// Tariffs of one carrier, inactive ones included
pub async fn list_by_transportista(transportista_id: i64, force: bool) -> Result<Vec<Tarifa>, String> {
    get_json(&api_url(&by_transportista_path(transportista_id)), force).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_transportista_path() {
        assert_eq!(by_transportista_path(12), "/api/tarifas?transportista_id=12");
    }
}
