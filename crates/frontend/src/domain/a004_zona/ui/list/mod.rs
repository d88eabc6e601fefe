use crate::domain::a004_zona::api::api;
use crate::shared::components::catalog_page::CatalogPage;
use crate::shared::components::data_table::ColumnDef;
use crate::shared::crud::use_crud;
use crate::shared::list_utils::DataRow;
use crate::shared::number_format::format_number_with_decimals;
use contracts::domain::a004_zona::Zona;
use leptos::prelude::*;

impl DataRow for Zona {
    fn row_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            "distancia_km" => format_number_with_decimals(self.distancia_km, 1),
            "descripcion" => self.descripcion.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        (key == "distancia_km").then_some(self.distancia_km)
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

#[component]
pub fn ZonaList() -> impl IntoView {
    let crud = use_crud(api());

    view! {
        <CatalogPage
            crud=crud
            columns=vec![
                ColumnDef::new("nombre", "Nombre"),
                ColumnDef::new("distancia_km", "Distancia (km)").numeric(),
                ColumnDef::new("descripcion", "Descripción"),
            ]
            new_item=Zona::default
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sorts_by_number() {
        let zona = Zona {
            id: Some(1),
            nombre: "AMBA".into(),
            distancia_km: 1250.5,
            descripcion: None,
            activo: true,
        };
        assert_eq!(zona.cell("distancia_km"), "1.250,5");
        assert_eq!(zona.number("distancia_km"), Some(1250.5));
        assert_eq!(zona.number("nombre"), None);
    }
}
