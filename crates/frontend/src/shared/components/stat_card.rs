use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int, format_number_with_decimals, format_percent};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } if currency == "ARS" => format_money(val),
        ValueFormat::Money { currency } => {
            format!("{} {}", format_number_with_decimals(val, 2), currency)
        }
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => format_percent(val, *decimals),
        ValueFormat::Integer => format_number_int(val),
    }
}

/// KPI card
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = no data)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into, optional)]
    status: Option<Signal<IndicatorStatus>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let status_class = move || match status.map(|s| s.get()).unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "-".to_string(),
    };

    let subtitle_view = move || {
        subtitle.and_then(|s| s.get()).map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1500.5, &ValueFormat::pesos()), "$ 1.500,50");
        assert_eq!(
            format_value(10.0, &ValueFormat::Money { currency: "USD".into() }),
            "10,00 USD"
        );
        assert_eq!(format_value(3.456, &ValueFormat::Number { decimals: 1 }), "3,5");
        assert_eq!(format_value(12.0, &ValueFormat::Percent { decimals: 0 }), "12%");
        assert_eq!(format_value(12345.0, &ValueFormat::Integer), "12.345");
    }
}
