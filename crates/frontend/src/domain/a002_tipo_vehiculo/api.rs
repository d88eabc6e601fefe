use crate::shared::api_client::CrudApi;
use contracts::domain::a002_tipo_vehiculo::TipoVehiculo;

pub fn api() -> CrudApi<TipoVehiculo> {
    CrudApi::new()
}
