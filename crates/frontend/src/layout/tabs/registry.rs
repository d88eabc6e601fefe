//! Tab key to view. Every tab key the sidebar can open is listed here.

use crate::dashboards::d400_comparativa_costos::ui::ComparativaCostosDashboard;
use crate::dashboards::d401_frecuencia_uso::ui::FrecuenciaUsoDashboard;
use crate::dashboards::d402_rendimiento_combustible::ui::RendimientoCombustibleDashboard;
use crate::domain::a001_transportista::ui::list::TransportistaList;
use crate::domain::a002_tipo_vehiculo::ui::list::TipoVehiculoList;
use crate::domain::a003_tipo_carga::ui::list::TipoCargaList;
use crate::domain::a004_zona::ui::list::ZonaList;
use crate::domain::a005_adicional::ui::list::AdicionalList;
use crate::domain::a006_carga_combustible::ui::list::CargaCombustibleList;
use crate::domain::a007_tarifa::ui::list::TarifaList;
use leptos::prelude::*;

/// Content of the tab `key`, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Catalogs
        "a001_transportistas" => view! { <TransportistaList /> }.into_any(),
        "a002_tipos_vehiculo" => view! { <TipoVehiculoList /> }.into_any(),
        "a003_tipos_carga" => view! { <TipoCargaList /> }.into_any(),
        "a004_zonas" => view! { <ZonaList /> }.into_any(),
        "a005_adicionales" => view! { <AdicionalList /> }.into_any(),
        "a006_cargas_combustible" => view! { <CargaCombustibleList /> }.into_any(),
        "a007_tarifas" => view! { <TarifaList /> }.into_any(),

        // Reports
        "d400_comparativa_costos" => view! { <ComparativaCostosDashboard /> }.into_any(),
        "d401_frecuencia_uso" => view! { <FrecuenciaUsoDashboard /> }.into_any(),
        "d402_rendimiento_combustible" => view! { <RendimientoCombustibleDashboard /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! {
                <div class="placeholder">
                    <h2>"Sección no disponible"</h2>
                    <p>{format!("No hay contenido para '{}'", key)}</p>
                </div>
            }
            .into_any()
        }
    }
}
