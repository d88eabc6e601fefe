use crate::domain::a005_adicional::api::{api, promote};
use crate::shared::components::catalog_page::CatalogPage;
use crate::shared::components::data_table::{ColumnDef, RowAction};
use crate::shared::crud::{use_crud, CrudHandle, CrudState};
use crate::shared::list_utils::DataRow;
use crate::shared::number_format::format_money;
use contracts::domain::a005_adicional::Adicional;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl DataRow for Adicional {
    fn row_id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "nombre" => self.nombre.clone(),
            "costo_default" => format_money(self.costo_default),
            "tipo" => self.kind_label().to_string(),
            "descripcion" => self.descripcion.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        (key == "costo_default").then_some(self.costo_default)
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

/// Mark the row as catalog right away; returns the previous row for rollback
fn promote_in_place(state: &mut CrudState<Adicional>, id: i64) -> Option<Adicional> {
    let previous = state.find(id).cloned()?;
    let mut promoted = previous.clone();
    promoted.promote();
    state.upsert(promoted);
    Some(previous)
}

fn run_promote(crud: CrudHandle<Adicional>, id: i64) {
    let Some(previous) = crud.state.try_update(|s| promote_in_place(s, id)).flatten() else {
        return;
    };
    spawn_local(async move {
        match promote(id).await {
            Ok(item) => {
                let message = format!("Adicional '{}' agregado al catálogo", item.nombre);
                crud.updated(item, message);
            }
            Err(e) => {
                log::warn!("Promotion of adicional {} rolled back: {}", id, e);
                crud.state.try_update(|s| s.upsert(previous));
                crud.notify_error(format!("No se pudo promover: {}", e));
            }
        }
    });
}

#[component]
pub fn AdicionalList() -> impl IntoView {
    let crud = use_crud(api());

    let promote_action = RowAction {
        label: "Promover al catálogo",
        icon: "arrow-up-circle",
        visible: |a: &Adicional| a.es_global && a.activo,
        on_click: Callback::new(move |id| run_promote(crud, id)),
    };

    view! {
        <CatalogPage
            crud=crud
            columns=vec![
                ColumnDef::new("nombre", "Nombre"),
                ColumnDef::new("tipo", "Tipo").filterable(),
                ColumnDef::new("costo_default", "Costo sugerido").numeric(),
                ColumnDef::new("descripcion", "Descripción"),
            ]
            new_item=Adicional::default
            extra_actions=vec![promote_action]
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flotante(id: i64) -> Adicional {
        Adicional {
            id: Some(id),
            nombre: "Peaje".into(),
            costo_default: 1500.0,
            es_global: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_promote_in_place_and_rollback() {
        let mut state = CrudState::new();
        state.loaded(vec![flotante(4)]);

        let previous = promote_in_place(&mut state, 4).unwrap();
        assert!(previous.es_global);
        assert!(state.find(4).unwrap().in_catalog());

        state.upsert(previous);
        assert!(state.find(4).unwrap().es_global);
    }

    #[test]
    fn test_promote_unknown_row() {
        let mut state = CrudState::<Adicional>::new();
        assert!(promote_in_place(&mut state, 9).is_none());
    }
}
