use crate::dashboards::d402_rendimiento_combustible::api;
use crate::shared::components::bar_chart::{BarChart, BarFormat, BarItem};
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{parse_input_value, to_input_value};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_with_decimals, format_opt};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d402_rendimiento_combustible::{
    efficiency, fuel_summary, in_range, Agrupacion, CargaCombustibleDetalle, Rendimiento,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DASHBOARD_KEY: &str = "d402_rendimiento_combustible";

/// km/l bars; groups without litres have nothing to plot
fn efficiency_bars(groups: &[Rendimiento]) -> Vec<BarItem> {
    groups
        .iter()
        .filter_map(|g| {
            let kml = g.km_por_litro?;
            let caption = format!("{} km/l", format_number_with_decimals(kml, 2));
            Some(BarItem::new(g.nombre.clone(), kml).with_caption(caption))
        })
        .collect()
}

/// Fuel consumption per vehicle type or carrier
#[component]
pub fn RendimientoCombustibleDashboard() -> impl IntoView {
    let rows = RwSignal::new(Vec::<CargaCombustibleDetalle>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let desde = RwSignal::new(None::<chrono::NaiveDate>);
    let hasta = RwSignal::new(None::<chrono::NaiveDate>);
    let agrupacion = RwSignal::new(Agrupacion::default());

    // The server bounds the fetch; later range edits narrow the rows already loaded
    let load = move |force: bool| {
        let (from, to) = (desde.get_untracked(), hasta.get_untracked());
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            match api::cargas(from, to, force).await {
                Ok(data) => {
                    log::debug!("{}: {} fuel loads", DASHBOARD_KEY, data.len());
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

    let filtered = Memo::new(move |_| rows.with(|r| in_range(r, desde.get(), hasta.get())));
    let groups = Memo::new(move |_| filtered.with(|r| efficiency(r, agrupacion.get())));
    let resumen = Memo::new(move |_| filtered.with(|r| fuel_summary(r, agrupacion.get())));
    let bars = Signal::derive(move || groups.with(|g| efficiency_bars(g)));

    view! {
        <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Rendimiento de combustible" subtitle="Kilómetros por litro y costo por kilómetro">
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
                    <span class="dashboard__filter-label">"Desde"</span>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || to_input_value(desde.get())
                        on:change=move |ev| desde.set(parse_input_value(&event_target_value(&ev)))
                    />
                </label>
                <label class="dashboard__filter">
                    <span class="dashboard__filter-label">"Hasta"</span>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || to_input_value(hasta.get())
                        on:change=move |ev| hasta.set(parse_input_value(&event_target_value(&ev)))
                    />
                </label>
                <label class="dashboard__filter">
                    <span class="dashboard__filter-label">"Agrupar por"</span>
                    <select
                        class="form__select"
                        on:change=move |ev| agrupacion.set(Agrupacion::from_key(&event_target_value(&ev)))
                    >
                        {[Agrupacion::TipoVehiculo, Agrupacion::Transportista]
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <option value=a.key() selected=move || agrupacion.get() == a>
                                        {a.label()}
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
                <StatCard
                    label="Cargas"
                    icon_name="fuel"
                    value=Signal::derive(move || Some(resumen.get().cargas as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || {
                        Some(format!("{} l", format_number_with_decimals(resumen.get().litros, 1)))
                    })
                />
                <StatCard
                    label="Costo total"
                    icon_name="dollar-sign"
                    value=Signal::derive(move || Some(resumen.get().costo))
                    format=ValueFormat::pesos()
                />
                <StatCard
                    label="km/l general"
                    icon_name="activity"
                    value=Signal::derive(move || resumen.get().km_por_litro)
                    format=ValueFormat::Number { decimals: 2 }
                    subtitle=Signal::derive(move || {
                        Some(format!("{} km", format_number_with_decimals(resumen.get().kilometros, 0)))
                    })
                />
                <StatCard
                    label="Mejor rendimiento"
                    icon_name="trending-up"
                    value=Signal::derive(move || resumen.get().mejor.and_then(|g| g.km_por_litro))
                    format=ValueFormat::Number { decimals: 2 }
                    status=Signal::derive(|| IndicatorStatus::Good)
                    subtitle=Signal::derive(move || resumen.get().mejor.map(|g| g.nombre))
                />
                <StatCard
                    label="Peor rendimiento"
                    icon_name="trending-down"
                    value=Signal::derive(move || resumen.get().peor.and_then(|g| g.km_por_litro))
                    format=ValueFormat::Number { decimals: 2 }
                    status=Signal::derive(|| IndicatorStatus::Bad)
                    subtitle=Signal::derive(move || resumen.get().peor.map(|g| g.nombre))
                />
            </div>

            <div class="dashboard__section">
                <h3 class="dashboard__section-title">
                    {move || format!("km/l por {}", agrupacion.get().label().to_lowercase())}
                </h3>
                <BarChart items=bars format=BarFormat::Number(2) empty_text="Sin cargas en el período" />
            </div>

            <div class="dashboard__section">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || agrupacion.get().label()}</TableHeaderCell>
                            <TableHeaderCell>"Cargas"</TableHeaderCell>
                            <TableHeaderCell>"Litros"</TableHeaderCell>
                            <TableHeaderCell>"Kilómetros"</TableHeaderCell>
                            <TableHeaderCell>"Costo"</TableHeaderCell>
                            <TableHeaderCell>"km/l"</TableHeaderCell>
                            <TableHeaderCell>"$/km"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|g| {
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{g.nombre}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{g.cargas}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_number_with_decimals(g.litros, 1)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_number_with_decimals(g.kilometros, 0)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_money(g.costo)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_opt(g.km_por_litro, 2)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_opt(g.costo_por_km, 2)}</TableCellLayout></TableCell>
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

    fn grupo(nombre: &str, km_por_litro: Option<f64>) -> Rendimiento {
        Rendimiento {
            id: 1,
            nombre: nombre.into(),
            cargas: 1,
            litros: 100.0,
            kilometros: 350.0,
            costo: 100_000.0,
            km_por_litro,
            costo_por_km: Some(285.71),
        }
    }

    #[test]
    fn test_efficiency_bars_skip_groups_without_litres() {
        let bars = efficiency_bars(&[grupo("Semi", Some(3.5)), grupo("Chasis", None)]);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "Semi");
        assert_eq!(bars[0].caption.as_deref(), Some("3,50 km/l"));
    }
}
