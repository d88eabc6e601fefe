use crate::layout::global_context::{AppGlobalContext, Tab as OpenTab};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Strip item: click activates, middle click or the cross closes
#[component]
pub fn Tab(tab: OpenTab) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided");
    let key = StoredValue::new(tab.key);

    let is_active = Memo::new(move |_| {
        key.with_value(|k| ctx.active.with(|a| a.as_deref() == Some(k.as_str())))
    });
    let close = move || key.with_value(|k| ctx.close_tab(k));
    let title = tab.title.clone();

    view! {
        <div
            class="tabs__tab"
            class:tabs__tab--active=is_active
            title=title
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
            on:auxclick=move |ev: ev::MouseEvent| {
                if ev.button() == 1 {
                    ev.prevent_default();
                    close();
                }
            }
        >
            <span class="tabs__tab-title">{tab.title}</span>
            <button
                class="tabs__tab-close"
                title="Cerrar"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
