pub mod sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub use sidebar::Sidebar;

/// Sidebar zone, collapsed with the header toggle
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");
    let collapsed = move || !ctx.left_open.get();

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=collapsed
            aria-hidden=move || collapsed().to_string()
        >
            {children()}
        </aside>
    }
}
