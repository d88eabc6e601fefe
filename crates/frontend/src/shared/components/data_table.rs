//! Generic entity table: per-column dropdown filters (combined with AND),
//! click-to-sort headers and row actions.

use crate::shared::icons::icon;
use crate::shared::list_utils::{apply_filters, distinct_values, get_sort_indicator, sort_rows, DataRow};
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    /// Show a dropdown with the distinct values of the column
    pub filterable: bool,
    /// Right-aligned
    pub numeric: bool,
}

impl ColumnDef {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            filterable: false,
            numeric: false,
        }
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// Additional per-row button
pub struct RowAction<R> {
    pub label: &'static str,
    pub icon: &'static str,
    pub visible: fn(&R) -> bool,
    pub on_click: Callback<i64>,
}

impl<R> Clone for RowAction<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RowAction<R> {}

#[component]
pub fn DataTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<ColumnDef>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] on_edit: Option<Callback<i64>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
    #[prop(optional)] on_reactivate: Option<Callback<i64>>,
    #[prop(optional)] extra_actions: Vec<RowAction<R>>,
) -> impl IntoView
where
    R: DataRow + Clone + Send + Sync + 'static,
{
    let filters = RwSignal::new(HashMap::<String, String>::new());
    let sort = RwSignal::new((String::new(), true));
    let columns = StoredValue::new(columns);
    let extra_actions = StoredValue::new(extra_actions);

    let visible_rows = Signal::derive(move || {
        let mut result = filters.with(|f| rows.with(|r| apply_filters(r, f)));
        let (key, ascending) = sort.get();
        if !key.is_empty() {
            sort_rows(&mut result, &key, ascending);
        }
        result
    });

    let toggle_sort = move |key: &'static str| {
        sort.update(|(current, ascending)| {
            if current == key {
                *ascending = !*ascending;
            } else {
                *current = key.to_string();
                *ascending = true;
            }
        });
    };

    let has_actions = on_edit.is_some()
        || on_delete.is_some()
        || on_reactivate.is_some()
        || !extra_actions.with_value(|a| a.is_empty());

    let filter_bar = move || {
        let filterable: Vec<ColumnDef> = columns.with_value(|c| c.iter().filter(|c| c.filterable).copied().collect());
        if filterable.is_empty() {
            return None;
        }
        Some(view! {
            <div class="filter-bar">
                {filterable
                    .into_iter()
                    .map(|col| {
                        let key = col.key;
                        let options = move || rows.with(|r| distinct_values(r, key));
                        let current = move || filters.with(|f| f.get(key).cloned().unwrap_or_default());
                        view! {
                            <label class="filter-bar__item">
                                <span class="filter-bar__label">{col.label}</span>
                                <select
                                    class="form__select form__select--small"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        filters.update(|f| {
                                            f.insert(key.to_string(), value);
                                        });
                                    }
                                >
                                    <option value="" selected=move || current().is_empty()>"Todos"</option>
                                    {move || {
                                        options()
                                            .into_iter()
                                            .map(|value| {
                                                let selected_value = value.clone();
                                                view! {
                                                    <option
                                                        value=value.clone()
                                                        selected=move || current() == selected_value
                                                    >
                                                        {value.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                        }
                    })
                    .collect_view()}
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| filters.set(HashMap::new())
                >
                    "Limpiar filtros"
                </Button>
            </div>
        })
    };

    let render_row = move |row: R| {
        let id = row.row_id();
        let active = row.is_active();
        let cells = columns
            .get_value()
            .into_iter()
            .map(|col| {
                let class = if col.numeric { "table__cell--right" } else { "" };
                let cell = row.cell(col.key);
                view! {
                    <TableCell>
                        <TableCellLayout>
                            <span class=class>{cell}</span>
                        </TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();

        let extra = extra_actions
            .get_value()
            .into_iter()
            .filter(|action| (action.visible)(&row))
            .map(|action| {
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        attr:title=action.label
                        on_click=move |_| action.on_click.run(id)
                    >
                        {icon(action.icon)}
                        {action.label}
                    </Button>
                }
            })
            .collect_view();

        let actions = has_actions.then(|| {
            view! {
                <TableCell>
                    <TableCellLayout>
                        <div class="table__actions">
                            {(!active).then(|| view! {
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Baja"</Badge>
                            })}
                            {on_edit.map(|cb| view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    attr:title="Editar"
                                    on_click=move |_| cb.run(id)
                                >
                                    {icon("edit")}
                                </Button>
                            })}
                            {on_delete.filter(|_| active).map(|cb| view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    attr:title="Dar de baja"
                                    on_click=move |_| cb.run(id)
                                >
                                    {icon("delete")}
                                </Button>
                            })}
                            {on_reactivate.filter(|_| !active).map(|cb| view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    attr:title="Reactivar"
                                    on_click=move |_| cb.run(id)
                                >
                                    {icon("rotate-ccw")}
                                </Button>
                            })}
                            {extra}
                        </div>
                    </TableCellLayout>
                </TableCell>
            }
        });

        view! {
            <TableRow>
                {cells}
                {actions}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            {filter_bar}
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .get_value()
                            .into_iter()
                            .map(|col| {
                                let key = col.key;
                                view! {
                                    <TableHeaderCell>
                                        <div class="table__header-sortable" on:click=move |_| toggle_sort(key)>
                                            {col.label}
                                            {move || sort.with(|(current, asc)| get_sort_indicator(current, key, *asc))}
                                        </div>
                                    </TableHeaderCell>
                                }
                            })
                            .collect_view()}
                        {has_actions.then(|| view! { <TableHeaderCell>"Acciones"</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || visible_rows.get().into_iter().map(render_row).collect_view()}
                </TableBody>
            </Table>
            <div class="data-table__footer">
                {move || {
                    if loading.get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        let shown = visible_rows.with(|r| r.len());
                        let total = rows.with(|r| r.len());
                        let text = if total == 0 {
                            "Sin registros".to_string()
                        } else {
                            format!("{} de {} registros", shown, total)
                        };
                        view! { <span class="text-muted">{text}</span> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
