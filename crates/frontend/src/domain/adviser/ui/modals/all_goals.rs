use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::modal::ModalFrame;
use crate::shared::date_utils::current_period;
use crate::shared::notifications::use_notifications;

/// Dialog for setting every adviser's goal for a month at once.
#[component]
pub fn UpdateAllGoalsModal(on_close: Callback<()>) -> impl IntoView {
    let store = use_advisers_store();
    let notifications = use_notifications();

    let (initial_year, initial_month) = current_period();
    let year = RwSignal::new(initial_year.to_string());
    let month = RwSignal::new(initial_month.to_string());
    let goal = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |_| {
        let y = year.get_untracked().trim().parse::<i32>().unwrap_or(0);
        let m = month.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let g = goal
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(f64::NAN);

        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = store.update_all_goals(y, m, g).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notifications.show_success("Metas actualizadas para todos los asesores");
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <ModalFrame title="Actualizar todas las metas".to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form-group">
                <label for="all-goals-year">"Año"</label>
                <input
                    type="number"
                    id="all-goals-year"
                    prop:value=move || year.get()
                    on:input=move |ev| year.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="all-goals-month">"Mes"</label>
                <input
                    type="number"
                    id="all-goals-month"
                    min="1"
                    max="12"
                    prop:value=move || month.get()
                    on:input=move |ev| month.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="all-goals-value">"Meta"</label>
                <input
                    type="number"
                    id="all-goals-value"
                    min="2000000"
                    step="0.01"
                    prop:value=move || goal.get()
                    on:input=move |ev| goal.set(event_target_value(&ev))
                />
                <span class="form-hint">"Mínimo 2.000.000 para todos los asesores"</span>
            </div>

            <div class="modal-actions">
                <button class="btn-secondary" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button class="btn-primary" disabled=move || saving.get() on:click=on_submit>
                    {move || if saving.get() { "Aplicando..." } else { "Aplicar a todos" }}
                </button>
            </div>
        </ModalFrame>
    }
}
