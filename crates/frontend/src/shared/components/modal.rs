use leptos::prelude::*;

/// Overlay + centered surface for dialog content. Clicking the backdrop
/// closes; clicks inside the surface do not propagate out.
#[component]
pub fn ModalFrame(
    /// Dialog title shown in the header
    title: String,
    /// Invoked on backdrop click and on the close button
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
