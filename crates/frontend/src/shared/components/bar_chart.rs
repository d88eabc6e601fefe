//! Horizontal bar chart drawn with plain CSS widths

use crate::shared::number_format::{format_money, format_number_with_decimals};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
    /// Text shown after the bar; the formatted value when `None`
    pub caption: Option<String>,
}

impl BarItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarFormat {
    Money,
    Number(u8),
}

impl BarFormat {
    fn apply(&self, value: f64) -> String {
        match self {
            Self::Money => format_money(value),
            Self::Number(decimals) => format_number_with_decimals(value, *decimals),
        }
    }
}

/// Bar widths in percent of the largest positive value
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| {
            if max > 0.0 && v.is_finite() && *v > 0.0 {
                v / max * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

#[component]
pub fn BarChart(
    #[prop(into)] items: Signal<Vec<BarItem>>,
    format: BarFormat,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "Sin datos para graficar".to_string());

    view! {
        <div class="bar-chart">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    return view! { <div class="bar-chart__empty">{empty_text.clone()}</div> }.into_any();
                }
                let values: Vec<f64> = items.iter().map(|i| i.value).collect();
                let widths = bar_widths(&values);
                items
                    .into_iter()
                    .zip(widths)
                    .map(|(item, width)| {
                        let caption = item.caption.clone().unwrap_or_else(|| format.apply(item.value));
                        view! {
                            <div class="bar-chart__row">
                                <div class="bar-chart__label" title=item.label.clone()>{item.label.clone()}</div>
                                <div class="bar-chart__track">
                                    <div class="bar-chart__bar" style=format!("width: {:.1}%;", width)></div>
                                </div>
                                <div class="bar-chart__value">{caption}</div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
