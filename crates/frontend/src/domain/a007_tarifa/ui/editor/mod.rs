//! Surcharge lines of the tariff being edited.
//!
//! Lines come from the catalog (priced at the suggested cost, editable) or
//! are typed ad-hoc; the page folds them into the form total.

use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a005_adicional::Adicional;
use contracts::domain::a007_tarifa::TarifaAdicional;
use contracts::shared::form::{number_text, parse_decimal};
use leptos::prelude::*;
use thaw::*;

/// Catalog surcharges not yet on the tariff, by name
pub fn available_adicionales(catalog: &[Adicional], lines: &[TarifaAdicional]) -> Vec<Adicional> {
    let mut available: Vec<Adicional> = catalog
        .iter()
        .filter(|a| a.in_catalog())
        .filter(|a| match a.id {
            Some(id) => !lines.iter().any(|l| l.adicional_id == Some(id)),
            None => false,
        })
        .cloned()
        .collect();
    available.sort_by(|a, b| a.nombre.to_lowercase().cmp(&b.nombre.to_lowercase()));
    available
}

pub fn add_from_catalog(lines: &mut Vec<TarifaAdicional>, adicional: &Adicional) -> Result<(), String> {
    if adicional
        .id
        .is_some_and(|id| lines.iter().any(|l| l.adicional_id == Some(id)))
    {
        return Err(format!("El adicional '{}' ya está en la tarifa", adicional.nombre));
    }
    lines.push(TarifaAdicional::from_catalog(adicional));
    Ok(())
}

pub fn add_ad_hoc(lines: &mut Vec<TarifaAdicional>, nombre: &str, costo: &str) -> Result<(), String> {
    let nombre = nombre.trim();
    if nombre.is_empty() {
        return Err("Ingrese el nombre del adicional".to_string());
    }
    let costo = parse_decimal(costo).ok_or_else(|| "El costo debe ser un número".to_string())?;
    if costo < 0.0 {
        return Err("El costo no puede ser negativo".to_string());
    }
    if lines
        .iter()
        .any(|l| l.nombre.trim().eq_ignore_ascii_case(nombre))
    {
        return Err(format!("El adicional '{}' ya está en la tarifa", nombre));
    }
    lines.push(TarifaAdicional::ad_hoc(nombre, costo));
    Ok(())
}

/// Apply a typed cost; invalid or negative input leaves the line unchanged
pub fn set_line_cost(lines: &mut [TarifaAdicional], index: usize, raw: &str) -> bool {
    match (lines.get_mut(index), parse_decimal(raw)) {
        (Some(line), Some(costo)) if costo >= 0.0 => {
            line.costo = costo;
            true
        }
        _ => false,
    }
}

pub fn remove_line(lines: &mut Vec<TarifaAdicional>, index: usize) {
    if index < lines.len() {
        lines.remove(index);
    }
}

#[component]
pub fn SurchargeEditor(
    lines: RwSignal<Vec<TarifaAdicional>>,
    #[prop(into)] catalog: Signal<Vec<Adicional>>,
) -> impl IntoView {
    let selected = RwSignal::new(String::new());
    let ad_hoc_nombre = RwSignal::new(String::new());
    let ad_hoc_costo = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let available = move || catalog.with(|c| lines.with(|l| available_adicionales(c, l)));

    let add_selected = move |_| {
        let Ok(id) = selected.get_untracked().parse::<i64>() else {
            error.set(Some("Seleccione un adicional del catálogo".to_string()));
            return;
        };
        let Some(adicional) = catalog.with_untracked(|c| c.iter().find(|a| a.id == Some(id)).cloned()) else {
            return;
        };
        let mut result = Ok(());
        lines.update(|l| result = add_from_catalog(l, &adicional));
        match result {
            Ok(()) => {
                selected.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let add_custom = move |_| {
        let nombre = ad_hoc_nombre.get_untracked();
        let costo = ad_hoc_costo.get_untracked();
        let mut result = Ok(());
        lines.update(|l| result = add_ad_hoc(l, &nombre, &costo));
        match result {
            Ok(()) => {
                ad_hoc_nombre.set(String::new());
                ad_hoc_costo.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let render_lines = move || {
        let current = lines.get();
        if current.is_empty() {
            return view! { <p class="text-muted">"Sin adicionales"</p> }.into_any();
        }
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Adicional"</TableHeaderCell>
                        <TableHeaderCell>"Origen"</TableHeaderCell>
                        <TableHeaderCell>"Costo"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {current
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            let badge = if line.is_ad_hoc() {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Ad-hoc"</Badge> }.into_any()
                            } else {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Catálogo"</Badge> }.into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{line.nombre.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{badge}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <input
                                                type="number"
                                                step="0.01"
                                                min="0"
                                                class="form__input form__input--number"
                                                prop:value=number_text(line.costo)
                                                on:change=move |ev| {
                                                    let raw = event_target_value(&ev);
                                                    let mut applied = false;
                                                    lines.update(|l| applied = set_line_cost(l, index, &raw));
                                                    if !applied {
                                                        error.set(Some("Costo inválido".to_string()));
                                                    }
                                                }
                                            />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                attr:title="Quitar"
                                                on_click=move |_| lines.update(|l| remove_line(l, index))
                                            >
                                                {icon("x")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <div class="surcharge-editor">
            <h3 class="surcharge-editor__title">"Adicionales"</h3>
            {render_lines}

            <div class="surcharge-editor__row">
                <select
                    class="form__select"
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="" selected=move || selected.with(|s| s.is_empty())>
                        "Agregar del catálogo..."
                    </option>
                    {move || {
                        available()
                            .into_iter()
                            .filter_map(|a| {
                                let id = a.id?.to_string();
                                let value = id.clone();
                                let label = format!("{} ({})", a.nombre, format_money(a.costo_default));
                                Some(view! {
                                    <option value=id selected=move || selected.with(|s| *s == value)>
                                        {label}
                                    </option>
                                })
                            })
                            .collect_view()
                    }}
                </select>
                <Button size=ButtonSize::Small on_click=add_selected>
                    {icon("plus")}
                    "Agregar"
                </Button>
            </div>

            <div class="surcharge-editor__row">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Adicional ad-hoc"
                    prop:value=move || ad_hoc_nombre.get()
                    on:input=move |ev| ad_hoc_nombre.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    class="form__input form__input--number"
                    placeholder="Costo"
                    prop:value=move || ad_hoc_costo.get()
                    on:input=move |ev| ad_hoc_costo.set(event_target_value(&ev))
                />
                <Button size=ButtonSize::Small on_click=add_custom>
                    {icon("plus")}
                    "Agregar ad-hoc"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <div class="surcharge-editor__total">
                "Total adicionales: "
                <strong>
                    {move || lines.with(|l| format_money(l.iter().map(|a| a.costo).sum()))}
                </strong>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adicional(id: i64, nombre: &str, costo: f64, es_global: bool) -> Adicional {
        Adicional {
            id: Some(id),
            nombre: nombre.into(),
            costo_default: costo,
            es_global,
            descripcion: None,
            activo: true,
        }
    }

    #[test]
    fn test_available_skips_used_and_global() {
        let catalog = vec![
            adicional(1, "Peaje", 1500.0, false),
            adicional(2, "Carga nocturna", 3000.0, false),
            adicional(3, "Espera", 800.0, true),
        ];
        let lines = vec![TarifaAdicional::from_catalog(&catalog[0])];
        let available = available_adicionales(&catalog, &lines);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].nombre, "Carga nocturna");
    }

    #[test]
    fn test_add_from_catalog_rejects_repeats() {
        let peaje = adicional(1, "Peaje", 1500.0, false);
        let mut lines = Vec::new();
        assert!(add_from_catalog(&mut lines, &peaje).is_ok());
        assert_eq!(lines[0].costo, 1500.0);
        assert_eq!(
            add_from_catalog(&mut lines, &peaje).unwrap_err(),
            "El adicional 'Peaje' ya está en la tarifa"
        );
    }

    #[test]
    fn test_add_ad_hoc() {
        let mut lines = Vec::new();
        assert!(add_ad_hoc(&mut lines, " Estadía ", "2500,50").is_ok());
        assert_eq!(lines[0], TarifaAdicional::ad_hoc("Estadía", 2500.5));
        assert!(add_ad_hoc(&mut lines, "estadía", "10").is_err());
        assert_eq!(add_ad_hoc(&mut lines, "", "10").unwrap_err(), "Ingrese el nombre del adicional");
        assert_eq!(add_ad_hoc(&mut lines, "Otro", "diez").unwrap_err(), "El costo debe ser un número");
        assert!(add_ad_hoc(&mut lines, "Otro", "-1").is_err());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_edit_and_remove_lines() {
        let mut lines = vec![
            TarifaAdicional::ad_hoc("A", 10.0),
            TarifaAdicional::ad_hoc("B", 20.0),
        ];
        assert!(set_line_cost(&mut lines, 1, "25"));
        assert!(!set_line_cost(&mut lines, 1, "-5"));
        assert!(!set_line_cost(&mut lines, 7, "5"));
        assert_eq!(lines[1].costo, 25.0);
        remove_line(&mut lines, 0);
        remove_line(&mut lines, 5);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].nombre, "B");
    }
}
