use crate::shared::api_client::CrudApi;
use contracts::domain::a003_tipo_carga::TipoCarga;

pub fn api() -> CrudApi<TipoCarga> {
    CrudApi::new()
}
