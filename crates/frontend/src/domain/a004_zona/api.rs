use crate::shared::api_client::CrudApi;
use contracts::domain::a004_zona::Zona;

pub fn api() -> CrudApi<Zona> {
    CrudApi::new()
}
