use contracts::dashboards::metrics::BestAdviser;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::stat_card::{StatCard, StatStatus};
use crate::shared::date_utils::current_period;
use crate::shared::number_format::{format_currency, format_percentage, progress_color};

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_advisers_store();
    let metrics = store.metrics;
    let loading = store.loading;

    let (initial_year, initial_month) = current_period();
    let year = RwSignal::new(initial_year);
    let month = RwSignal::new(initial_month);

    let load = move || {
        let y = year.get_untracked();
        let m = month.get_untracked();
        spawn_local(async move {
            let _ = store.fetch_dashboard_metrics(y, m).await;
        });
    };

    // Current period on first render.
    load();

    let reload = load;
    let on_month_change = move |ev: web_sys::Event| {
        if let Ok(m) = event_target_value(&ev).parse::<u32>() {
            month.set(m);
            reload();
        }
    };
    let reload = load;
    let on_year_change = move |ev: web_sys::Event| {
        if let Ok(y) = event_target_value(&ev).parse::<i32>() {
            year.set(y);
            reload();
        }
    };

    let total_sales = Signal::derive(move || metrics.get().map(|m| format_currency(m.total_sales)));
    let total_goal = Signal::derive(move || metrics.get().map(|m| format_currency(m.total_goal)));
    let active_advisers =
        Signal::derive(move || metrics.get().map(|m| m.active_advisers.to_string()));
    let achievement =
        Signal::derive(move || metrics.get().map(|m| format_percentage(m.goal_achievement, 1)));
    let achievement_status = Signal::derive(move || {
        metrics
            .get()
            .map(|m| {
                if m.goal_achievement >= 100.0 {
                    StatStatus::Good
                } else if m.goal_achievement >= 80.0 {
                    StatStatus::Warning
                } else {
                    StatStatus::Bad
                }
            })
            .unwrap_or_default()
    });
    let average_sales =
        Signal::derive(move || metrics.get().map(|m| format_currency(m.average_sales)));
    let neutral = Signal::derive(|| StatStatus::Neutral);

    view! {
        <div class="dashboard-page">
            <div class="page-header">
                <h2>"Dashboard"</h2>
                <div class="period-selector">
                    <select on:change=on_month_change>
                        {MONTH_NAMES
                            .iter()
                            .enumerate()
                            .map(|(i, name)| {
                                let value = (i + 1) as u32;
                                view! {
                                    <option
                                        value=value.to_string()
                                        selected=move || month.get() == value
                                    >
                                        {*name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="number"
                        class="year-input"
                        prop:value=move || year.get().to_string()
                        on:change=on_year_change
                    />
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Cargando métricas..."</div>
            </Show>

            <div class="stat-grid">
                <StatCard
                    label="Ventas totales".to_string()
                    value=total_sales
                    status=neutral
                />
                <StatCard
                    label="Meta total".to_string()
                    value=total_goal
                    status=neutral
                />
                <StatCard
                    label="Asesores activos".to_string()
                    value=active_advisers
                    status=neutral
                />
                <StatCard
                    label="Cumplimiento de meta".to_string()
                    value=achievement
                    status=achievement_status
                />
                <StatCard
                    label="Venta promedio".to_string()
                    value=average_sales
                    status=neutral
                />
            </div>

            <div class="featured-grid">
                {move || {
                    metrics
                        .get()
                        .and_then(|m| m.best_adviser)
                        .map(|best| {
                            view! { <BestAdviserCard title="Mejor asesor".to_string() best=best /> }
                        })
                }}
                {move || {
                    metrics
                        .get()
                        .and_then(|m| m.best_upt_adviser)
                        .map(|best| {
                            view! { <BestAdviserCard title="Mejor UPT".to_string() best=best /> }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn BestAdviserCard(title: String, best: BestAdviser) -> impl IntoView {
    let achievement_class = progress_color(best.goal_achievement);
    let upt_line = best.upt.map(|u| format!("UPT: {:.2}", u));

    view! {
        <div class="featured-card">
            <div class="featured-card__title">{title}</div>
            <div class="featured-card__name">{best.adviser_name.clone()}</div>
            <div class="featured-card__sales">{format_currency(best.total_sales)}</div>
            <div class="featured-card__goal">
                {format!("Meta: {}", format_currency(best.total_goal))}
            </div>
            <div class=format!(
                "featured-card__achievement {}",
                achievement_class,
            )>{format_percentage(best.goal_achievement, 1)}</div>
            {upt_line.map(|line| view! { <div class="featured-card__upt">{line}</div> })}
        </div>
    }
}
