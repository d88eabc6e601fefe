//! Renders a list of [`FieldDescriptor`]s against a `FormValues` signal.

use crate::shared::number_format::format_number_with_decimals;
use contracts::shared::form::{FieldDescriptor, FieldError, FieldKind, FormValues, SelectSources};
use leptos::prelude::*;

/// Error message shown under a field, if any
fn field_error(errors: &[FieldError], key: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.key == Some(key))
        .map(|e| e.message.clone())
}

#[component]
pub fn DynamicForm(
    fields: Vec<FieldDescriptor>,
    values: RwSignal<FormValues>,
    #[prop(into)] sources: Signal<SelectSources>,
    #[prop(into)] errors: Signal<Vec<FieldError>>,
) -> impl IntoView {
    view! {
        <div class="form">
            {fields
                .into_iter()
                .map(|field| render_field(field, values, sources, errors))
                .collect_view()}
        </div>
    }
}

fn render_field(
    field: FieldDescriptor,
    values: RwSignal<FormValues>,
    sources: Signal<SelectSources>,
    errors: Signal<Vec<FieldError>>,
) -> AnyView {
    let key = field.key;
    let input_id = format!("field-{}", key);
    let current = move || values.with(|v| v.get(key).to_string());
    let set_value = move |value: String| values.update(|v| v.set(key, value));
    let error = move || errors.with(|e| field_error(e, key));
    let placeholder = field.placeholder.unwrap_or_default();

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=input_id.clone()
                class="form__input"
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=input_id.clone()
                class="form__textarea"
                rows="3"
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Number { step } => view! {
            <input
                type="number"
                id=input_id.clone()
                class="form__input form__input--number"
                step=step.to_string()
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                id=input_id.clone()
                class="form__input"
                prop:value=current
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                id=input_id.clone()
                class="form__checkbox"
                prop:checked=move || values.with(|v| v.flag(key))
                on:change=move |ev| set_value(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Select { source } => view! {
            <select
                id=input_id.clone()
                class="form__select"
                on:change=move |ev| set_value(event_target_value(&ev))
            >
                <option value="" selected=move || current().is_empty()>"Seleccionar..."</option>
                {move || {
                    let options = sources.with(|s| s.get(source).cloned().unwrap_or_default());
                    options
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            view! {
                                <option value=option.value selected=move || current() == value>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Result { .. } => view! {
            <div id=input_id.clone() class="form__result">
                {move || {
                    let value = values.with(|v| field.computed(v)).unwrap_or_default();
                    format_number_with_decimals(value, 2)
                }}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--error=move || error().is_some()>
            <label for=input_id class="form__label">
                {field.label}
                {field.validation.is_required().then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            {move || error().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_lookup() {
        let errors = vec![
            FieldError::form("Ya existe"),
            FieldError::field("nombre", "Nombre es obligatorio"),
        ];
        assert_eq!(field_error(&errors, "nombre").as_deref(), Some("Nombre es obligatorio"));
        assert_eq!(field_error(&errors, "costo"), None);
    }
}
