use crate::domain::a001_transportista::api::api as transportistas_api;
use crate::domain::a002_tipo_vehiculo::api::api as tipos_vehiculo_api;
use crate::domain::a006_carga_combustible::api::api;
use crate::shared::components::catalog_page::{CrudMessage, CrudToolbar, DeleteConfirm};
use crate::shared::components::data_table::{ColumnDef, DataTable};
use crate::shared::components::entity_form_dialog::EntityFormDialog;
use crate::shared::crud::{use_catalog, use_crud};
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_utils::DataRow;
use crate::shared::number_format::{format_money, format_number_with_decimals, format_opt};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use chrono::Datelike;
use contracts::domain::a006_carga_combustible::CargaCombustible;
use contracts::domain::common::{CatalogEntity, NameLookup};
use contracts::shared::form::{select_options, SelectSources};
use leptos::prelude::*;

/// Fuel load with the referenced names resolved
#[derive(Debug, Clone, PartialEq)]
pub struct CargaRow {
    pub carga: CargaCombustible,
    pub transportista: String,
    pub tipo_vehiculo: String,
}

impl CargaRow {
    pub fn new(carga: CargaCombustible, transportistas: &NameLookup, tipos: &NameLookup) -> Self {
        Self {
            transportista: transportistas.name(carga.transportista_id),
            tipo_vehiculo: tipos.name(carga.tipo_vehiculo_id),
            carga,
        }
    }
}

impl DataRow for CargaRow {
    fn row_id(&self) -> i64 {
        self.carga.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        let c = &self.carga;
        match key {
            "fecha" => format_date(c.fecha),
            "transportista" => self.transportista.clone(),
            "tipo_vehiculo" => self.tipo_vehiculo.clone(),
            "litros" => format_number_with_decimals(c.litros, 2),
            "kilometros" => format_number_with_decimals(c.kilometros, 1),
            "precio_litro" => format_money(c.precio_litro),
            "costo_total" => format_money(c.costo_total()),
            "rendimiento" => format_opt(c.rendimiento_km_l(), 2),
            _ => String::new(),
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        let c = &self.carga;
        match key {
            "fecha" => Some(c.fecha.num_days_from_ce() as f64),
            "litros" => Some(c.litros),
            "kilometros" => Some(c.kilometros),
            "precio_litro" => Some(c.precio_litro),
            "costo_total" => Some(c.costo_total()),
            "rendimiento" => c.rendimiento_km_l(),
            _ => None,
        }
    }

    fn is_active(&self) -> bool {
        self.carga.activo
    }
}

#[component]
pub fn CargaCombustibleList() -> impl IntoView {
    let crud = use_crud(api());
    let transportistas = use_catalog(transportistas_api());
    let tipos_vehiculo = use_catalog(tipos_vehiculo_api());

    let rows = Signal::derive(move || {
        let t_names = transportistas.with(|t| NameLookup::from_entities(t));
        let v_names = tipos_vehiculo.with(|v| NameLookup::from_entities(v));
        crud.state
            .with(|s| s.visible_items())
            .into_iter()
            .map(|c| CargaRow::new(c, &t_names, &v_names))
            .collect::<Vec<_>>()
    });

    let sources = Signal::derive(move || {
        let editing = crud.state.with(|s| s.editing.clone());
        let keep_t = editing.as_ref().map(|c| c.transportista_id);
        let keep_v = editing.as_ref().map(|c| c.tipo_vehiculo_id);
        let mut sources = SelectSources::new();
        sources.insert("transportistas", transportistas.with(|t| select_options(t, keep_t)));
        sources.insert("tipos-vehiculo", tipos_vehiculo.with(|v| select_options(v, keep_v)));
        sources
    });

    view! {
        <PageFrame page_id=page_id(&CargaCombustible::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=CargaCombustible::list_name()>
                <CrudToolbar
                    crud=crud
                    on_new=Callback::new(move |_| crud.open_create(CargaCombustible::on(today())))
                />
            </PageHeader>
            <div class="page__content">
                <CrudMessage crud=crud />
                <DataTable
                    rows=rows
                    columns=vec![
                        ColumnDef::new("fecha", "Fecha"),
                        ColumnDef::new("transportista", "Transportista").filterable(),
                        ColumnDef::new("tipo_vehiculo", "Tipo de vehículo").filterable(),
                        ColumnDef::new("litros", "Litros").numeric(),
                        ColumnDef::new("kilometros", "Kilómetros").numeric(),
                        ColumnDef::new("precio_litro", "Precio / litro").numeric(),
                        ColumnDef::new("costo_total", "Costo total").numeric(),
                        ColumnDef::new("rendimiento", "km / l").numeric(),
                    ]
                    loading=crud.loading()
                    on_edit=Callback::new(move |id| crud.open_edit(id))
                    on_delete=Callback::new(move |id| crud.request_delete(id))
                    on_reactivate=Callback::new(move |id| crud.reactivate(id))
                />
            </div>
            <EntityFormDialog crud=crud sources=sources />
            <DeleteConfirm crud=crud />
        </PageFrame>
    }
}
