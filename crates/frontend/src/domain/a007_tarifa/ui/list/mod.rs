use crate::domain::a001_transportista::api::api as transportistas_api;
use crate::domain::a002_tipo_vehiculo::api::api as tipos_vehiculo_api;
use crate::domain::a003_tipo_carga::api::api as tipos_carga_api;
use crate::domain::a004_zona::api::api as zonas_api;
use crate::domain::a005_adicional::api::api as adicionales_api;
use crate::domain::a007_tarifa::api::{api, list_by_transportista};
use crate::domain::a007_tarifa::ui::editor::SurchargeEditor;
use crate::shared::components::catalog_page::{CrudMessage, CrudToolbar, DeleteConfirm};
use crate::shared::components::data_table::{ColumnDef, DataTable};
use crate::shared::components::entity_form_dialog::EntityFormDialog;
use crate::shared::crud::{use_catalog, use_crud};
use crate::shared::date_utils::format_opt_date;
use crate::shared::list_utils::DataRow;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a007_tarifa::{find_duplicate, Tarifa, TarifaAdicional, TOTAL_ADICIONALES_KEY};
use contracts::domain::common::{CatalogEntity, NameLookup};
use contracts::shared::form::{number_text, select_options, FormValues, SelectSources};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Name lookups for the four references of a tariff
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TarifaLookups {
    pub transportistas: NameLookup,
    pub tipos_vehiculo: NameLookup,
    pub zonas: NameLookup,
    pub tipos_carga: NameLookup,
}

/// Tariff with the referenced names resolved
#[derive(Debug, Clone, PartialEq)]
pub struct TarifaRow {
    pub tarifa: Tarifa,
    pub transportista: String,
    pub tipo_vehiculo: String,
    pub zona: String,
    pub tipo_carga: String,
}

impl TarifaRow {
    pub fn new(tarifa: Tarifa, lookups: &TarifaLookups) -> Self {
        Self {
            transportista: lookups.transportistas.name(tarifa.transportista_id),
            tipo_vehiculo: lookups.tipos_vehiculo.name(tarifa.tipo_vehiculo_id),
            zona: lookups.zonas.name(tarifa.zona_id),
            tipo_carga: lookups.tipos_carga.name(tarifa.tipo_carga_id),
            tarifa,
        }
    }
}

impl DataRow for TarifaRow {
    fn row_id(&self) -> i64 {
        self.tarifa.id.unwrap_or_default()
    }

    fn cell(&self, key: &str) -> String {
        let t = &self.tarifa;
        match key {
            "transportista" => self.transportista.clone(),
            "tipo_vehiculo" => self.tipo_vehiculo.clone(),
            "zona" => self.zona.clone(),
            "tipo_carga" => self.tipo_carga.clone(),
            "costo_base" => format_money(t.costo_base),
            "adicionales" => {
                if t.adicionales.is_empty() {
                    "-".to_string()
                } else {
                    t.adicionales
                        .iter()
                        .map(|a| a.nombre.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
            "total" => format_money(t.total()),
            "vigencia" => format_opt_date(t.vigencia_desde),
            _ => String::new(),
        }
    }

    fn number(&self, key: &str) -> Option<f64> {
        let t = &self.tarifa;
        match key {
            "costo_base" => Some(t.costo_base),
            "adicionales" => Some(t.total_adicionales()),
            "total" => Some(t.total()),
            _ => None,
        }
    }

    fn is_active(&self) -> bool {
        self.tarifa.activo
    }
}

/// Message for a combination that already has an active tariff
pub fn duplicate_message(existing: &[Tarifa], candidate: &Tarifa) -> Result<(), String> {
    match find_duplicate(existing, candidate) {
        Some(other) => Err(format!(
            "Ya existe una tarifa activa para esa combinación ({})",
            other.display_name()
        )),
        None => Ok(()),
    }
}

#[component]
pub fn TarifaList() -> impl IntoView {
    let crud = use_crud(api());
    let transportistas = use_catalog(transportistas_api());
    let tipos_vehiculo = use_catalog(tipos_vehiculo_api());
    let zonas = use_catalog(zonas_api());
    let tipos_carga = use_catalog(tipos_carga_api());
    let adicionales = use_catalog(adicionales_api());

    // Carrier scope: `Some` shows the tariffs the backend returns for one carrier
    let scope = RwSignal::new(None::<i64>);
    let scoped = RwSignal::new(None::<Vec<Tarifa>>);
    let items = Memo::new(move |_| crud.state.with(|s| s.items.clone()));
    Effect::new(move |prev: Option<Option<i64>>| {
        let current = scope.get();
        items.track();
        match current {
            None => scoped.set(None),
            Some(id) => {
                let force = prev == Some(current);
                spawn_local(async move {
                    match list_by_transportista(id, force).await {
                        Ok(list) => {
                            if scope.get_untracked() == Some(id) {
                                let _ = scoped.try_set(Some(list));
                            }
                        }
                        Err(e) => crud.notify_error(format!("No se pudieron cargar las tarifas: {}", e)),
                    }
                });
            }
        }
        current
    });

    let lookups = Memo::new(move |_| TarifaLookups {
        transportistas: transportistas.with(|t| NameLookup::from_entities(t)),
        tipos_vehiculo: tipos_vehiculo.with(|v| NameLookup::from_entities(v)),
        zonas: zonas.with(|z| NameLookup::from_entities(z)),
        tipos_carga: tipos_carga.with(|c| NameLookup::from_entities(c)),
    });

    let rows = Signal::derive(move || {
        let show_inactive = crud.state.with(|s| s.show_inactive);
        let tarifas = match scoped.get() {
            Some(list) => list
                .into_iter()
                .filter(|t| show_inactive || t.activo)
                .collect(),
            None => crud.state.with(|s| s.visible_items()),
        };
        lookups.with(|l| tarifas.into_iter().map(|t| TarifaRow::new(t, l)).collect::<Vec<_>>())
    });

    let sources = Signal::derive(move || {
        let editing = crud.state.with(|s| s.editing.clone());
        let keep = |f: fn(&Tarifa) -> i64| editing.as_ref().map(f);
        let mut sources = SelectSources::new();
        sources.insert(
            "transportistas",
            transportistas.with(|t| select_options(t, keep(|t: &Tarifa| t.transportista_id))),
        );
        sources.insert(
            "tipos-vehiculo",
            tipos_vehiculo.with(|v| select_options(v, keep(|t: &Tarifa| t.tipo_vehiculo_id))),
        );
        sources.insert("zonas", zonas.with(|z| select_options(z, keep(|t: &Tarifa| t.zona_id))));
        sources.insert(
            "tipos-carga",
            tipos_carga.with(|c| select_options(c, keep(|t: &Tarifa| t.tipo_carga_id))),
        );
        sources
    });

    // Editor state: lines are edited next to the form and summed into it
    let values = RwSignal::new(FormValues::new());
    let lines = RwSignal::new(Vec::<TarifaAdicional>::new());
    Effect::new(move |prev: Option<bool>| {
        let open = crud.state.with(|s| s.form_open);
        if open && prev != Some(true) {
            let current = crud
                .state
                .with_untracked(|s| s.editing.as_ref().map(|t| t.adicionales.clone()))
                .unwrap_or_default();
            lines.set(current);
        }
        open
    });
    Effect::new(move |_| {
        let total: f64 = lines.with(|l| l.iter().map(|a| a.costo).sum());
        values.update(|v| v.set(TOTAL_ADICIONALES_KEY, number_text(total)));
    });

    let prepare = Callback::new(move |base: Tarifa| Tarifa {
        adicionales: lines.get_untracked(),
        ..base
    });
    let extra_check = Callback::new(move |candidate: Tarifa| {
        crud.state
            .with_untracked(|s| duplicate_message(&s.items, &candidate))
    });

    view! {
        <PageFrame page_id=page_id(&Tarifa::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=Tarifa::list_name()>
                <select
                    class="form__select"
                    on:change=move |ev| scope.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="" selected=move || scope.get().is_none()>
                        "Todos los transportistas"
                    </option>
                    {move || {
                        transportistas
                            .get()
                            .into_iter()
                            .filter_map(|t| {
                                let id = t.id?;
                                Some(view! {
                                    <option value=id.to_string() selected=move || scope.get() == Some(id)>
                                        {t.nombre}
                                    </option>
                                })
                            })
                            .collect_view()
                    }}
                </select>
                <CrudToolbar crud=crud on_new=Callback::new(move |_| crud.open_create(Tarifa::default())) />
            </PageHeader>
            <div class="page__content">
                <CrudMessage crud=crud />
                <DataTable
                    rows=rows
                    columns=vec![
                        ColumnDef::new("transportista", "Transportista").filterable(),
                        ColumnDef::new("tipo_vehiculo", "Tipo de vehículo").filterable(),
                        ColumnDef::new("zona", "Zona").filterable(),
                        ColumnDef::new("tipo_carga", "Tipo de carga").filterable(),
                        ColumnDef::new("costo_base", "Costo base").numeric(),
                        ColumnDef::new("adicionales", "Adicionales"),
                        ColumnDef::new("total", "Total").numeric(),
                        ColumnDef::new("vigencia", "Vigente desde"),
                    ]
                    loading=crud.loading()
                    on_edit=Callback::new(move |id| crud.open_edit(id))
                    on_delete=Callback::new(move |id| crud.request_delete(id))
                    on_reactivate=Callback::new(move |id| crud.reactivate(id))
                />
            </div>
            <EntityFormDialog
                crud=crud
                sources=sources
                values=values
                prepare=prepare
                extra_check=extra_check
            >
                <SurchargeEditor lines=lines catalog=adicionales />
            </EntityFormDialog>
            <DeleteConfirm crud=crud />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_zona::Zona;

    fn tarifa(id: i64, zona_id: i64) -> Tarifa {
        Tarifa {
            id: Some(id),
            transportista_id: 1,
            tipo_vehiculo_id: 2,
            zona_id,
            tipo_carga_id: 4,
            costo_base: 10_000.0,
            adicionales: vec![TarifaAdicional::ad_hoc("Peaje", 1500.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_row_cells() {
        let lookups = TarifaLookups {
            zonas: NameLookup::from_entities(&[Zona {
                id: Some(3),
                nombre: "Cuyo".into(),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let row = TarifaRow::new(tarifa(1, 3), &lookups);
        assert_eq!(row.cell("zona"), "Cuyo");
        assert_eq!(row.cell("transportista"), "#1");
        assert_eq!(row.cell("adicionales"), "Peaje");
        assert_eq!(row.cell("total"), "$ 11.500,00");
        assert_eq!(row.number("total"), Some(11_500.0));
        assert_eq!(row.cell("vigencia"), "-");
    }

    #[test]
    fn test_duplicate_message() {
        let existing = vec![tarifa(1, 3)];
        let mut candidate = tarifa(0, 3);
        candidate.id = None;
        assert_eq!(
            duplicate_message(&existing, &candidate).unwrap_err(),
            "Ya existe una tarifa activa para esa combinación (Tarifa #1)"
        );
        candidate.zona_id = 5;
        assert!(duplicate_message(&existing, &candidate).is_ok());
        assert!(duplicate_message(&existing, &tarifa(1, 3)).is_ok());
    }
}
