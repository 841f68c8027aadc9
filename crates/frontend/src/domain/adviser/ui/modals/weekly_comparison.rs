use contracts::domain::adviser::{Adviser, AdviserId};
use contracts::domain::weekly_comparison::WeeklyComparison;
use contracts::shared::sales_calc::weekly_growth;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::weekly_comparison::api;
use crate::shared::components::modal::ModalFrame;
use crate::shared::notifications::use_notifications;
use crate::shared::number_format::{format_currency, format_percentage};

fn load_comparison(
    adviser_id: AdviserId,
    data: RwSignal<Option<WeeklyComparison>>,
    is_empty: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    loading.set(true);
    error.set(None);
    spawn_local(async move {
        match api::generate_for_adviser(adviser_id).await {
            Ok(Some(comparison)) => {
                is_empty.set(false);
                data.set(Some(comparison));
            }
            Ok(None) => {
                is_empty.set(true);
                data.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });
}

/// Weekly current-vs-previous sales for one adviser, with per-field edits.
#[component]
pub fn WeeklyComparisonModal(adviser: Adviser, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let adviser_id = adviser.id;

    let data = RwSignal::new(None::<WeeklyComparison>);
    let is_empty = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let current_input = RwSignal::new(String::new());
    let previous_input = RwSignal::new(String::new());

    load_comparison(adviser_id, data, is_empty, error, loading);

    // Seed the edit fields once the comparison arrives.
    Effect::new(move |_| {
        if let Some(c) = data.get() {
            current_input.set(c.current_week_sales.to_string());
            previous_input.set(c.previous_week_sales.to_string());
        }
    });

    let title = format!("Comparación semanal — {}", adviser.full_name());

    let change_text = move || match data.get() {
        None => String::new(),
        Some(c) if c.previous_week_sales == 0.0 => "Sin comparación".to_string(),
        Some(c) => {
            let sign = if c.is_positive { "+" } else { "" };
            format!("{}{}", sign, format_percentage(c.percentage_change, 1))
        }
    };

    let change_label = move || match data.get() {
        None => String::new(),
        Some(c) if c.previous_week_sales == 0.0 => "Sin comparación".to_string(),
        Some(c) => {
            if c.is_positive {
                "Crecimiento".to_string()
            } else {
                "Decrecimiento".to_string()
            }
        }
    };

    // Live preview while editing, before the backend recomputes.
    let preview_growth = move || {
        let current = current_input.get().trim().parse::<f64>().unwrap_or(0.0);
        let previous = previous_input.get().trim().parse::<f64>().unwrap_or(0.0);
        format_percentage(weekly_growth(current, previous), 1)
    };

    let save_week = move |previous: bool| {
        let raw = if previous {
            previous_input.get_untracked()
        } else {
            current_input.get_untracked()
        };
        let Ok(value) = raw.trim().parse::<f64>() else {
            error.set(Some("El valor ingresado no es un número válido".to_string()));
            return;
        };

        spawn_local(async move {
            let result = if previous {
                api::update_previous_week(adviser_id, value).await
            } else {
                api::update_current_week(adviser_id, value).await
            };
            match result {
                Ok(()) => {
                    notifications.show_success("Comparación actualizada");
                    load_comparison(adviser_id, data, is_empty, error, loading);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Cargando comparación..."</div>
            </Show>

            <Show when=move || is_empty.get()>
                <div class="empty-state">"Aún no hay datos de comparación para este asesor."</div>
            </Show>

            {move || {
                data.get()
                    .map(|c| {
                        view! {
                            <div class="comparison-summary">
                                <div class="comparison-row">
                                    <span>"Semana actual"</span>
                                    <strong>{format_currency(c.current_week_sales)}</strong>
                                </div>
                                <div class="comparison-row">
                                    <span>"Semana anterior"</span>
                                    <strong>{format_currency(c.previous_week_sales)}</strong>
                                </div>
                                <div class="comparison-row">
                                    <span>{change_label()}</span>
                                    <strong>{change_text()}</strong>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="form-group">
                <label for="current-week">"Ventas semana actual"</label>
                <input
                    type="number"
                    id="current-week"
                    min="0"
                    step="0.01"
                    prop:value=move || current_input.get()
                    on:input=move |ev| current_input.set(event_target_value(&ev))
                />
                <button class="btn-secondary" on:click=move |_| save_week(false)>
                    "Guardar actual"
                </button>
            </div>

            <div class="form-group">
                <label for="previous-week">"Ventas semana anterior"</label>
                <input
                    type="number"
                    id="previous-week"
                    min="0"
                    step="0.01"
                    prop:value=move || previous_input.get()
                    on:input=move |ev| previous_input.set(event_target_value(&ev))
                />
                <button class="btn-secondary" on:click=move |_| save_week(true)>
                    "Guardar anterior"
                </button>
            </div>

            <div class="comparison-preview">
                <span>"Crecimiento con los valores ingresados: "</span>
                <strong>{preview_growth}</strong>
            </div>

            <div class="modal-actions">
                <button class="btn-secondary" on:click=move |_| on_close.run(())>
                    "Cerrar"
                </button>
            </div>
        </ModalFrame>
    }
}
