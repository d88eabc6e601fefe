use crate::domain::a001_transportista::api::api;
use crate::shared::components::catalog_page::CatalogPage;
use crate::shared::components::data_table::ColumnDef;
use crate::shared::crud::use_crud;
use crate::shared::list_utils::DataRow;
use contracts::domain::a001_transportista::Transportista;
use leptos::prelude::*;

/// `20123456786` → `20-12345678-6`; anything else is shown as stored
fn format_cuit(cuit: &str) -> String {
    if cuit.len() == 11 && cuit.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &cuit[..2], &cuit[2..10], &cuit[10..])
    } else {
        cuit.to_string()
    }
}

impl DataRow for Transportista {
    fn row_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            "cuit" => format_cuit(&self.cuit),
            "telefono" => self.telefono.clone().unwrap_or_default(),
            "email" => self.email.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

#[component]
pub fn TransportistaList() -> impl IntoView {
    let crud = use_crud(api());

    view! {
        <CatalogPage
            crud=crud
            columns=vec![
                ColumnDef::new("nombre", "Nombre"),
                ColumnDef::new("cuit", "CUIT"),
                ColumnDef::new("telefono", "Teléfono"),
                ColumnDef::new("email", "Email"),
            ]
            new_item=Transportista::default
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cuit() {
        assert_eq!(format_cuit("20123456786"), "20-12345678-6");
        assert_eq!(format_cuit("2012"), "2012");
    }

    #[test]
    fn test_row_cells() {
        let t = Transportista {
            id: Some(3),
            nombre: "Expreso Sur".into(),
            cuit: "30712345671".into(),
            telefono: None,
            email: Some("ops@sur.com.ar".into()),
            activo: false,
        };
        assert_eq!(t.row_id(), 3);
        assert_eq!(t.cell("cuit"), "30-71234567-1");
        assert_eq!(t.cell("telefono"), "");
        assert!(!DataRow::is_active(&t));
    }
}
