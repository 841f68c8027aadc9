use contracts::domain::adviser::Adviser;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::modal::ModalFrame;
use crate::shared::date_utils::current_period;

/// Dialog for overwriting an adviser's recorded sales for a month.
#[component]
pub fn MonthlySalesModal(adviser: Adviser, on_close: Callback<()>) -> impl IntoView {
    let store = use_advisers_store();
    let adviser_id = adviser.id;

    let (initial_year, initial_month) = current_period();
    let year = RwSignal::new(initial_year.to_string());
    let month = RwSignal::new(initial_month.to_string());
    let total_sales = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let title = format!("Ventas del mes — {}", adviser.full_name());

    let on_submit = move |_| {
        let y = year.get_untracked().trim().parse::<i32>().unwrap_or(0);
        let m = month.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let total = total_sales
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(f64::NAN);

        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = store.update_monthly_sales(adviser_id, y, m, total).await;
            saving.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form-group">
                <label for="monthly-year">"Año"</label>
                <input
                    type="number"
                    id="monthly-year"
                    prop:value=move || year.get()
                    on:input=move |ev| year.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="monthly-month">"Mes"</label>
                <input
                    type="number"
                    id="monthly-month"
                    min="1"
                    max="12"
                    prop:value=move || month.get()
                    on:input=move |ev| month.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="monthly-total">"Ventas totales"</label>
                <input
                    type="number"
                    id="monthly-total"
                    min="0"
                    step="0.01"
                    prop:value=move || total_sales.get()
                    on:input=move |ev| total_sales.set(event_target_value(&ev))
                />
            </div>

            <div class="modal-actions">
                <button class="btn-secondary" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button class="btn-primary" disabled=move || saving.get() on:click=on_submit>
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </button>
            </div>
        </ModalFrame>
    }
}
