//! List page shared by the simple catalogs and the building blocks the
//! composed pages (cargas, tarifas) reuse.

use super::confirm_dialog::ConfirmDialog;
use super::data_table::{ColumnDef, DataTable, RowAction};
use super::entity_form_dialog::EntityFormDialog;
use super::message_banner::MessageBanner;
use crate::shared::crud::CrudHandle;
use crate::shared::icons::icon;
use crate::shared::list_utils::DataRow;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::common::CatalogEntity;
use contracts::shared::form::{FormSchema, SelectSources};
use leptos::prelude::*;
use thaw::*;

/// Nuevo / Actualizar / Mostrar bajas
#[component]
pub fn CrudToolbar<T>(crud: CrudHandle<T>, on_new: Callback<()>) -> impl IntoView
where
    T: CatalogEntity + Send + Sync,
{
    let show_inactive = Signal::derive(move || crud.state.with(|s| s.show_inactive));

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_new.run(())>
                {icon("plus")}
                "Nuevo"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=move || crud.state.with(|s| s.loading)
                on_click=move |_| crud.load(true)
            >
                {icon("refresh")}
                "Actualizar"
            </Button>
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| crud.toggle_inactive()>
                {move || if show_inactive.get() { icon("eye-off") } else { icon("eye") }}
                {move || if show_inactive.get() { "Ocultar bajas" } else { "Mostrar bajas" }}
            </Button>
        </Flex>
    }
}

/// Confirmation for the baja lógica of `crud.state.pending_delete`
#[component]
pub fn DeleteConfirm<T>(crud: CrudHandle<T>) -> impl IntoView
where
    T: CatalogEntity + Send + Sync,
{
    let open = Signal::derive(move || crud.state.with(|s| s.pending_delete.is_some()));
    let message = Signal::derive(move || {
        crud.state.with(|s| {
            s.pending_delete
                .as_ref()
                .map(|item| {
                    format!(
                        "¿Dar de baja {} '{}'? El registro queda inactivo y puede reactivarse.",
                        T::element_name().to_lowercase(),
                        item.display_name()
                    )
                })
                .unwrap_or_default()
        })
    });

    view! {
        <ConfirmDialog
            open=open
            title="Confirmar baja"
            message=message
            confirm_label="Dar de baja"
            busy=crud.deleting()
            on_confirm=Callback::new(move |_| crud.confirm_delete())
            on_cancel=Callback::new(move |_| crud.cancel_delete())
        />
    }
}

/// Banner bound to the CRUD message
#[component]
pub fn CrudMessage<T>(crud: CrudHandle<T>) -> impl IntoView
where
    T: CatalogEntity + Send + Sync,
{
    view! {
        <MessageBanner
            message=Signal::derive(move || crud.state.with(|s| s.message.clone()))
            on_dismiss=Callback::new(move |id| crud.dismiss(id))
        />
    }
}

/// Complete list page for entities that are their own table row
#[component]
pub fn CatalogPage<T>(
    crud: CrudHandle<T>,
    columns: Vec<ColumnDef>,
    /// Template for "Nuevo"
    new_item: fn() -> T,
    #[prop(optional, into)] sources: Option<Signal<SelectSources>>,
    #[prop(optional)] extra_actions: Vec<RowAction<T>>,
) -> impl IntoView
where
    T: CatalogEntity + FormSchema + DataRow + Send + Sync,
{
    let sources = sources.unwrap_or_else(|| Signal::derive(SelectSources::new));

    view! {
        <PageFrame page_id=page_id(&T::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <PageHeader title=T::list_name()>
                <CrudToolbar crud=crud on_new=Callback::new(move |_| crud.open_create(new_item())) />
            </PageHeader>
            <div class="page__content">
                <CrudMessage crud=crud />
                <DataTable
                    rows=crud.visible_items()
                    columns=columns
                    loading=crud.loading()
                    on_edit=Callback::new(move |id| crud.open_edit(id))
                    on_delete=Callback::new(move |id| crud.request_delete(id))
                    on_reactivate=Callback::new(move |id| crud.reactivate(id))
                    extra_actions=extra_actions
                />
            </div>
            <EntityFormDialog crud=crud sources=sources />
            <DeleteConfirm crud=crud />
        </PageFrame>
    }
}
