use crate::dashboards::d400_comparativa_costos::api;
use crate::shared::components::bar_chart::{BarChart, BarFormat, BarItem};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_comparativa_costos::{
    compare_by_zone, ranking_for_zone, summary, ComparativaFilter, TarifaDetalle, ZonaComparativa,
};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DASHBOARD_KEY: &str = "d400_comparativa_costos";

/// Distinct `(id, name)` pairs of the active rows, by name
fn distinct_options<F>(rows: &[TarifaDetalle], pick: F) -> Vec<(i64, String)>
where
    F: Fn(&TarifaDetalle) -> (i64, &str),
{
    let mut options: Vec<(i64, String)> = Vec::new();
    for row in rows.iter().filter(|r| r.activo) {
        let (id, name) = pick(row);
        if !options.iter().any(|(existing, _)| *existing == id) {
            options.push((id, name.to_string()));
        }
    }
    options.sort_by(|a, b| a.1.cmp(&b.1));
    options
}

fn zone_bars(zonas: &[ZonaComparativa]) -> Vec<BarItem> {
    zonas
        .iter()
        .map(|z| {
            let caption = format!("{} ({} tarifas)", format_money(z.promedio), z.cantidad);
            BarItem::new(z.zona.clone(), z.promedio).with_caption(caption)
        })
        .collect()
}

#[component]
fn IdSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    view! {
        <label class="dashboard__filter">
            <span class="dashboard__filter-label">{label}</span>
            <select
                class="form__select"
                on:change=move |ev| selected.set(event_target_value(&ev).parse::<i64>().ok())
            >
                <option value="" selected=move || selected.get().is_none()>"Todos"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| {
                            view! {
                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Cost comparison between carriers, zone by zone
#[component]
pub fn ComparativaCostosDashboard() -> impl IntoView {
    let rows = RwSignal::new(Vec::<TarifaDetalle>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let tipo_vehiculo = RwSignal::new(None::<i64>);
    let tipo_carga = RwSignal::new(None::<i64>);
    let zona = RwSignal::new(None::<i64>);

    let load = move |force: bool| {
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            match api::tarifas(force).await {
                Ok(data) => {
                    log::debug!("{}: {} tariffs", DASHBOARD_KEY, data.len());
                    let _ = rows.try_set(data);
                }
                Err(e) => {
                    log::error!("{}: {}", DASHBOARD_KEY, e);
                    let _ = error_msg.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    load(false);

    let filter = Memo::new(move |_| ComparativaFilter {
        tipo_vehiculo_id: tipo_vehiculo.get(),
        tipo_carga_id: tipo_carga.get(),
    });
    let zonas = Memo::new(move |_| rows.with(|r| compare_by_zone(r, &filter.get())));
    let resumen = Memo::new(move |_| rows.with(|r| summary(r, &filter.get())));
    let ranking = Memo::new(move |_| {
        let zona_id = zona.get()?;
        Some(rows.with(|r| {
            ranking_for_zone(r, zona_id, &filter.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        }))
    });

    let vehiculo_options = Signal::derive(move || {
        rows.with(|r| distinct_options(r, |t| (t.tipo_vehiculo_id, t.tipo_vehiculo.as_str())))
    });
    let carga_options = Signal::derive(move || {
        rows.with(|r| distinct_options(r, |t| (t.tipo_carga_id, t.tipo_carga.as_str())))
    });
    let zona_options = Signal::derive(move || {
        zonas.with(|z| z.iter().map(|z| (z.zona_id, z.zona.clone())).collect::<Vec<_>>())
    });
    let bars = Signal::derive(move || zonas.with(|z| zone_bars(z)));

    view! {
        <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Comparativa de costos" subtitle="Costo total por zona y transportista">
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=move || loading.get()
                    on_click=move |_| load(true)
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="dashboard__filters">
                <IdSelect label="Tipo de vehículo" options=vehiculo_options selected=tipo_vehiculo />
                <IdSelect label="Tipo de carga" options=carga_options selected=tipo_carga />
            </div>

            {move || error_msg.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

            <Show when=move || loading.get() && rows.with(|r| r.is_empty())>
                <Flex justify=FlexJustify::Center>
                    <Spinner />
                </Flex>
            </Show>

            <div class="dashboard__cards">
                <StatCard
                    label="Tarifas"
                    icon_name="hash"
                    value=Signal::derive(move || Some(resumen.get().cantidad as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || Some(format!("{} zonas", resumen.get().zonas)))
                />
                <StatCard
                    label="Mínimo"
                    icon_name="trending-down"
                    value=Signal::derive(move || resumen.get().minimo)
                    format=ValueFormat::pesos()
                />
                <StatCard
                    label="Promedio"
                    icon_name="activity"
                    value=Signal::derive(move || resumen.get().promedio)
                    format=ValueFormat::pesos()
                />
                <StatCard
                    label="Máximo"
                    icon_name="trending-up"
                    value=Signal::derive(move || resumen.get().maximo)
                    format=ValueFormat::pesos()
                />
            </div>

            <div class="dashboard__section">
                <h3 class="dashboard__section-title">"Costo promedio por zona"</h3>
                <BarChart items=bars format=BarFormat::Money empty_text="Sin tarifas para los filtros elegidos" />
            </div>

            <div class="dashboard__section">
                <h3 class="dashboard__section-title">"Detalle por zona"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Zona"</TableHeaderCell>
                            <TableHeaderCell>"Tarifas"</TableHeaderCell>
                            <TableHeaderCell>"Mínimo"</TableHeaderCell>
                            <TableHeaderCell>"Promedio"</TableHeaderCell>
                            <TableHeaderCell>"Máximo"</TableHeaderCell>
                            <TableHeaderCell>"Diferencia"</TableHeaderCell>
                            <TableHeaderCell>"Más barato"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            zonas
                                .get()
                                .into_iter()
                                .map(|z| {
                                    let zona_id = z.zona_id;
                                    let diferencia = z.diferencia();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        class:table__link--selected=move || zona.get() == Some(zona_id)
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            zona.set(Some(zona_id));
                                                        }
                                                    >
                                                        {z.zona.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{z.cantidad}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(z.minimo)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(z.promedio)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(z.maximo)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_money(diferencia)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{z.mas_barato.clone()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            <div class="dashboard__section">
                <div class="dashboard__filters">
                    <IdSelect label="Ranking de la zona" options=zona_options selected=zona />
                </div>
                {move || match ranking.get() {
                    None => view! {
                        <div class="dashboard__hint">"Elegí una zona para ver el ranking de transportistas"</div>
                    }
                    .into_any(),
                    Some(ranking) => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"#"</TableHeaderCell>
                                    <TableHeaderCell>"Transportista"</TableHeaderCell>
                                    <TableHeaderCell>"Vehículo"</TableHeaderCell>
                                    <TableHeaderCell>"Carga"</TableHeaderCell>
                                    <TableHeaderCell>"Base"</TableHeaderCell>
                                    <TableHeaderCell>"Adicionales"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {ranking
                                    .into_iter()
                                    .enumerate()
                                    .map(|(pos, t)| {
                                        let adicionales = t.total() - t.costo_base;
                                        let total = t.total();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{pos + 1}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{t.transportista.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{t.tipo_vehiculo.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{t.tipo_carga.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_money(t.costo_base)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_money(adicionales)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_money(total)}</TableCellLayout></TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detalle(id: i64, vehiculo_id: i64, vehiculo: &str, activo: bool) -> TarifaDetalle {
        TarifaDetalle {
            id,
            transportista_id: 1,
            transportista: "Rápido Sur".into(),
            tipo_vehiculo_id: vehiculo_id,
            tipo_vehiculo: vehiculo.into(),
            zona_id: 1,
            zona: "Norte".into(),
            tipo_carga_id: 1,
            tipo_carga: "General".into(),
            costo_base: 1000.0,
            adicionales: vec![],
            activo,
        }
    }

    #[test]
    fn test_distinct_options() {
        let rows = vec![
            detalle(1, 2, "Semi", true),
            detalle(2, 1, "Camioneta", true),
            detalle(3, 2, "Semi", true),
            detalle(4, 3, "Chasis", false),
        ];
        let options = distinct_options(&rows, |t| (t.tipo_vehiculo_id, t.tipo_vehiculo.as_str()));
        assert_eq!(options, vec![(1, "Camioneta".to_string()), (2, "Semi".to_string())]);
    }

    #[test]
    fn test_zone_bars() {
        let zonas = vec![ZonaComparativa {
            zona_id: 1,
            zona: "Norte".into(),
            cantidad: 2,
            minimo: 1000.0,
            maximo: 3000.0,
            promedio: 2000.0,
            mas_barato: "Rápido Sur".into(),
        }];
        let bars = zone_bars(&zonas);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].value, 2000.0);
        assert_eq!(bars[0].caption.as_deref(), Some("$ 2.000,00 (2 tarifas)"));
    }
}
