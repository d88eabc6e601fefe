use crate::shared::api_client::CrudApi;
use contracts::domain::a001_transportista::Transportista;

pub fn api() -> CrudApi<Transportista> {
    CrudApi::new()
}
