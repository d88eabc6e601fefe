//! Sidebar with collapsible menu groups. Every item opens a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "tarifas",
            label: "Tarifas",
            icon: "dollar-sign",
            items: vec![
                ("a007_tarifas", tab_label_for_key("a007_tarifas"), "dollar-sign"),
                ("a005_adicionales", tab_label_for_key("a005_adicionales"), "tag"),
            ],
        },
        MenuGroup {
            id: "catalogos",
            label: "Catálogos",
            icon: "database",
            items: vec![
                ("a001_transportistas", tab_label_for_key("a001_transportistas"), "building"),
                ("a002_tipos_vehiculo", tab_label_for_key("a002_tipos_vehiculo"), "truck"),
                ("a003_tipos_carga", tab_label_for_key("a003_tipos_carga"), "package"),
                ("a004_zonas", tab_label_for_key("a004_zonas"), "map-pin"),
            ],
        },
        MenuGroup {
            id: "combustible",
            label: "Combustible",
            icon: "fuel",
            items: vec![(
                "a006_cargas_combustible",
                tab_label_for_key("a006_cargas_combustible"),
                "fuel",
            )],
        },
        MenuGroup {
            id: "reportes",
            label: "Reportes",
            icon: "bar-chart",
            items: vec![
                ("d400_comparativa_costos", tab_label_for_key("d400_comparativa_costos"), "bar-chart"),
                ("d401_frecuencia_uso", tab_label_for_key("d401_frecuencia_uso"), "pie-chart"),
                (
                    "d402_rendimiento_combustible",
                    tab_label_for_key("d402_rendimiento_combustible"),
                    "activity",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["tarifas", "catalogos"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let toggle = move |_| {
                        expanded_groups.update(|items| {
                            if let Some(pos) = items.iter().position(|x| *x == gid) {
                                items.remove(pos);
                            } else {
                                items.push(gid);
                            }
                        })
                    };
                    let is_expanded = move || expanded_groups.with(|items| items.contains(&gid));
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(id))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing tab label for {}", id);
            }
        }
    }
}
