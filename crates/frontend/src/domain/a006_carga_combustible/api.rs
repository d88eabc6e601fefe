use crate::shared::api_client::CrudApi;
use contracts::domain::a006_carga_combustible::CargaCombustible;

pub fn api() -> CrudApi<CargaCombustible> {
    CrudApi::new()
}
