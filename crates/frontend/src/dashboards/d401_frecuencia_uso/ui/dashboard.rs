use crate::dashboards::d401_frecuencia_uso::api;
use crate::shared::components::bar_chart::{BarChart, BarFormat, BarItem};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::number_format::format_percent;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_comparativa_costos::TarifaDetalle;
use contracts::dashboards::d401_frecuencia_uso::{frequency, total_count, Dimension, Frecuencia};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DASHBOARD_KEY: &str = "d401_frecuencia_uso";

fn frequency_bars(items: &[Frecuencia]) -> Vec<BarItem> {
    items
        .iter()
        .map(|f| {
            let caption = format!("{} ({})", f.cantidad, format_percent(f.porcentaje, 1));
            BarItem::new(f.nombre.clone(), f.cantidad as f64).with_caption(caption)
        })
        .collect()
}

/// How often each carrier, vehicle, zone, cargo type or surcharge shows up in the tariffs
#[component]
pub fn FrecuenciaUsoDashboard() -> impl IntoView {
    let rows = RwSignal::new(Vec::<TarifaDetalle>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let dimension = RwSignal::new(Dimension::Transportista);

    let load = move |force: bool| {
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            match api::tarifas(force).await {
                Ok(data) => {
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

    let items = Memo::new(move |_| rows.with(|r| frequency(r, dimension.get())));
    let total = Signal::derive(move || items.with(|i| Some(total_count(i) as f64)));
    let distinct = Signal::derive(move || items.with(|i| Some(i.len() as f64)));
    let top = Signal::derive(move || items.with(|i| i.first().map(|f| f.porcentaje)));
    let top_name = Signal::derive(move || items.with(|i| i.first().map(|f| f.nombre.clone())));
    let bars = Signal::derive(move || items.with(|i| frequency_bars(i)));

    view! {
        <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Frecuencia de uso" subtitle="Tarifas activas por dimensión">
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
                <label class="dashboard__filter">
                    <span class="dashboard__filter-label">"Contar por"</span>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Some(d) = Dimension::from_key(&event_target_value(&ev)) {
                                dimension.set(d);
                            }
                        }
                    >
                        {Dimension::all()
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <option value=d.key() selected=move || dimension.get() == d>
                                        {d.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            {move || error_msg.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

            <Show when=move || loading.get() && rows.with(|r| r.is_empty())>
                <Flex justify=FlexJustify::Center>
                    <Spinner />
                </Flex>
            </Show>

            <div class="dashboard__cards">
                <StatCard label="Usos" icon_name="hash" value=total format=ValueFormat::Integer />
                <StatCard label="Valores distintos" icon_name="database" value=distinct format=ValueFormat::Integer />
                <StatCard
                    label="Más usado"
                    icon_name="trending-up"
                    value=top
                    format=ValueFormat::Percent { decimals: 1 }
                    subtitle=top_name
                />
            </div>

            <div class="dashboard__section">
                <h3 class="dashboard__section-title">
                    {move || format!("Uso por {}", dimension.get().label().to_lowercase())}
                </h3>
                <BarChart items=bars format=BarFormat::Number(0) empty_text="Sin tarifas activas" />
            </div>

            <div class="dashboard__section">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || dimension.get().label()}</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Porcentaje"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{f.nombre}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{f.cantidad}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_percent(f.porcentaje, 1)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_bars() {
        let items = vec![
            Frecuencia {
                nombre: "Norte".into(),
                cantidad: 2,
                porcentaje: 66.666,
            },
            Frecuencia {
                nombre: "Sur".into(),
                cantidad: 1,
                porcentaje: 33.333,
            },
        ];
        let bars = frequency_bars(&items);
        assert_eq!(bars[0].value, 2.0);
        assert_eq!(bars[0].caption.as_deref(), Some("2 (66,7%)"));
        assert_eq!(bars[1].caption.as_deref(), Some("1 (33,3%)"));
    }
}
