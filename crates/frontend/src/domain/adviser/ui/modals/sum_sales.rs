use contracts::domain::adviser::Adviser;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::modal::ModalFrame;

/// Dialog for adding one sale to an adviser's running total.
#[component]
pub fn SumSalesModal(adviser: Adviser, on_close: Callback<()>) -> impl IntoView {
    let store = use_advisers_store();
    let target = StoredValue::new(adviser.clone());

    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let title = format!("Sumar venta — {}", adviser.full_name());

    let on_submit = move |_| {
        // Empty or malformed input becomes NaN; the use case rejects it
        // with the proper message.
        let value = amount
            .get_untracked()
            .trim()
            .parse::<f64>()
            .unwrap_or(f64::NAN);

        let adviser = target.get_value();
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = store.increment_sales(&adviser, value).await;
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
                <label for="sale-amount">"Valor de la venta"</label>
                <input
                    type="number"
                    id="sale-amount"
                    min="0"
                    step="0.01"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                    placeholder="0"
                />
            </div>

            <div class="modal-actions">
                <button class="btn-secondary" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button class="btn-primary" disabled=move || saving.get() on:click=on_submit>
                    {move || if saving.get() { "Sumando..." } else { "Sumar" }}
                </button>
            </div>
        </ModalFrame>
    }
}
