use leptos::prelude::*;

/// Visual tone of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatStatus {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

/// Dashboard figure card: label above, formatted value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Pre-formatted primary value (None = still loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Visual status
    #[prop(into)]
    status: Signal<StatStatus>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        StatStatus::Good => "stat-card stat-card--success",
        StatStatus::Bad => "stat-card stat-card--error",
        StatStatus::Warning => "stat-card stat-card--warning",
        StatStatus::Neutral => "stat-card",
    };

    view! {
        <div class=status_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
