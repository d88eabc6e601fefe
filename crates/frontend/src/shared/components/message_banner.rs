use crate::shared::crud::{Message, MessageKind};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Success / error banner with a close button
#[component]
pub fn MessageBanner(
    #[prop(into)] message: Signal<Option<Message>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let (class, icon_name) = match m.kind {
                MessageKind::Success => ("alert alert--success", "check-circle"),
                MessageKind::Error => ("alert alert--error", "alert-circle"),
            };
            let id = m.id;
            view! {
                <div class=class role="status">
                    {icon(icon_name)}
                    <span class="alert__text">{m.text}</span>
                    <button class="alert__close" title="Cerrar" on:click=move |_| on_dismiss.run(id)>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
