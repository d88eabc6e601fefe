use crate::domain::a003_tipo_carga::api::api;
use crate::shared::components::catalog_page::CatalogPage;
use crate::shared::components::data_table::ColumnDef;
use crate::shared::crud::use_crud;
use crate::shared::list_utils::DataRow;
use contracts::domain::a003_tipo_carga::TipoCarga;
use leptos::prelude::*;

impl DataRow for TipoCarga {
    fn row_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            "descripcion" => self.descripcion.clone().unwrap_or_default(),
            "refrigeracion" => if self.requiere_refrigeracion { "Sí" } else { "No" }.to_string(),
            _ => String::new(),
        }
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

#[component]
pub fn TipoCargaList() -> impl IntoView {
    let crud = use_crud(api());

    view! {
        <CatalogPage
            crud=crud
            columns=vec![
                ColumnDef::new("nombre", "Nombre"),
                ColumnDef::new("refrigeracion", "Refrigerada").filterable(),
                ColumnDef::new("descripcion", "Descripción"),
            ]
            new_item=TipoCarga::default
        />
    }
}
