use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value, `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)] tone: Signal<StatTone>,
    /// Optional line below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(&icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "…".to_string())}
            </div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
