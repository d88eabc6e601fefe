use super::dynamic_form::DynamicForm;
use crate::shared::crud::CrudHandle;
use contracts::domain::common::CatalogEntity;
use contracts::shared::form::{FieldError, FormSchema, FormValues, SelectSources};
use leptos::prelude::*;
use thaw::*;

/// Create / edit dialog for the item in `crud.state.editing`.
///
/// Values are reset from the edited item each time the dialog opens. On
/// submit the per-field checks, the entity rules and `extra_check` run in
/// that order; only a valid item reaches `crud.save`.
#[component]
pub fn EntityFormDialog<T>(
    crud: CrudHandle<T>,
    #[prop(into)] sources: Signal<SelectSources>,
    /// Caller-owned values, for pages that edit extra state next to the form
    #[prop(optional)]
    values: Option<RwSignal<FormValues>>,
    /// Applied to the edited item before the form values
    #[prop(optional)]
    prepare: Option<Callback<T, T>>,
    #[prop(optional)] extra_check: Option<Callback<T, Result<(), String>>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView
where
    T: CatalogEntity + FormSchema + Send + Sync,
{
    let values = values.unwrap_or_else(|| RwSignal::new(FormValues::new()));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let form_open = Signal::derive(move || crud.state.with(|s| s.form_open));

    let model = RwSignal::new(false);
    Effect::new(move |_| model.set(form_open.get()));
    Effect::new(move |prev: Option<bool>| {
        let now = model.get();
        if prev == Some(true) && !now {
            crud.close_form();
        }
        now
    });

    Effect::new(move |prev: Option<bool>| {
        let open = form_open.get();
        if open && prev != Some(true) {
            if let Some(item) = crud.state.with_untracked(|s| s.editing.clone()) {
                values.set(item.to_values());
            }
            errors.set(Vec::new());
        }
        open
    });

    let submit = move || {
        let Some(base) = crud.state.with_untracked(|s| s.editing.clone()) else {
            return;
        };
        let base = match prepare {
            Some(prepare) => prepare.run(base),
            None => base,
        };
        let item = match values.with_untracked(|v| T::submit(&base, v)) {
            Ok(item) => item,
            Err(found) => {
                log::debug!("{} form rejected: {} error(s)", T::element_name(), found.len());
                errors.set(found);
                return;
            }
        };
        if let Some(check) = extra_check {
            if let Err(message) = check.run(item.clone()) {
                errors.set(vec![FieldError::form(message)]);
                return;
            }
        }
        errors.set(Vec::new());
        crud.save(item);
    };

    let title = move || {
        let creating = crud
            .state
            .with(|s| s.editing.as_ref().map(|e| e.id().is_none()).unwrap_or(true));
        let name = T::element_name().to_lowercase();
        if creating {
            format!("Alta de {}", name)
        } else {
            format!("Editar {}", name)
        }
    };

    let form_errors = move || {
        errors.with(|e| {
            e.iter()
                .filter(|e| e.key.is_none())
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Dialog open=model>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        {move || {
                            let messages = form_errors();
                            (!messages.is_empty()).then(|| view! {
                                <div class="alert alert--error">
                                    {messages.into_iter().map(|m| view! { <div>{m}</div> }).collect_view()}
                                </div>
                            })
                        }}
                        <DynamicForm
                            fields=T::fields()
                            values=values
                            sources=sources
                            errors=errors
                        />
                        {children.as_ref().map(|children| children())}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=move || crud.state.with(|s| s.saving)
                            on_click=move |_| submit()
                        >
                            {move || if crud.state.with(|s| s.saving) { "Guardando..." } else { "Guardar" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| crud.close_form()
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
