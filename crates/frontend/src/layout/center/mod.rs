pub mod tabs;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use tabs::TabStrip;

/// Tab strip plus the content of every open tab
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let has_tabs = move || tabs_store.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            {move || (!has_tabs()).then(|| view! {
                <div class="placeholder">
                    <h2>"Tarifas de Transporte"</h2>
                    <p>"Elija una sección en el menú de la izquierda."</p>
                </div>
            })}
            {children()}
        </div>
    }
}
