use crate::domain::a002_tipo_vehiculo::api::api;
use crate::shared::components::catalog_page::CatalogPage;
use crate::shared::components::data_table::ColumnDef;
use crate::shared::crud::use_crud;
use crate::shared::list_utils::DataRow;
use crate::shared::number_format::format_number_int;
use contracts::domain::a002_tipo_vehiculo::TipoVehiculo;
use leptos::prelude::*;

impl DataRow for TipoVehiculo {
    fn row_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            "capacidad_kg" => format_number_int(self.capacidad_kg),
            "descripcion" => self.descripcion.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        (key == "capacidad_kg").then_some(self.capacidad_kg)
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

#[component]
pub fn TipoVehiculoList() -> impl IntoView {
    let crud = use_crud(api());

    view! {
        <CatalogPage
            crud=crud
            columns=vec![
                ColumnDef::new("nombre", "Nombre"),
                ColumnDef::new("capacidad_kg", "Capacidad (kg)").numeric(),
                ColumnDef::new("descripcion", "Descripción"),
            ]
            new_item=TipoVehiculo::default
        />
    }
}
