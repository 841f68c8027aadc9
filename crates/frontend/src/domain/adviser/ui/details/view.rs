use contracts::domain::adviser::Adviser;
use leptos::prelude::*;

use super::view_model::AdviserDetailsViewModel;
use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::modal::ModalFrame;

#[component]
pub fn AdviserDetails(
    /// Adviser being edited; `None` creates a new one
    adviser: Option<Adviser>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = AdviserDetailsViewModel::new();
    vm.load(adviser);

    let store = use_advisers_store();
    let form = vm.form;
    let error = vm.error;
    let saving = vm.saving;

    let title = if vm.is_edit_mode() {
        "Editar asesor"
    } else {
        "Nuevo asesor"
    };

    let on_save = move |_| {
        vm.save_command(store, on_close);
    };

    view! {
        <ModalFrame title=title.to_string() on_close=on_close>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Nombre"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Nombre del asesor"
                    />
                </div>

                <div class="form-group">
                    <label for="last_name">"Apellido"</label>
                    <input
                        type="text"
                        id="last_name"
                        prop:value=move || form.get().last_name
                        on:input=move |ev| {
                            form.update(|f| f.last_name = event_target_value(&ev));
                        }
                        placeholder="Apellido del asesor"
                    />
                </div>

                <div class="form-group">
                    <label for="sales">"Ventas acumuladas"</label>
                    <input
                        type="number"
                        id="sales"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().sales
                        on:input=move |ev| {
                            form.update(|f| f.sales = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="goal_value">"Meta"</label>
                    <input
                        type="number"
                        id="goal_value"
                        min="0"
                        step="0.01"
                        prop:value=move || form.get().goal_value
                        on:input=move |ev| {
                            form.update(|f| f.goal_value = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label for="active">"Activo"</label>
                    <input
                        type="checkbox"
                        id="active"
                        prop:checked=move || form.get().active
                        on:change=move |ev| {
                            form.update(|f| f.active = event_target_checked(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="upt">"UPT"</label>
                    <input
                        type="text"
                        id="upt"
                        prop:value=move || form.get().upt
                        on:input=move |ev| {
                            form.update(|f| f.upt = event_target_value(&ev));
                        }
                        placeholder="Unidades por ticket"
                    />
                </div>
            </div>

            <div class="modal-actions">
                <button class="btn-secondary" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button class="btn-primary" disabled=move || saving.get() on:click=on_save>
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </button>
            </div>
        </ModalFrame>
    }
}
