use leptos::prelude::*;

/// Horizontal goal-progress bar. Expects an already-capped percentage
/// (0..=100); the uncapped achievement figure belongs in a badge next to
/// the bar, not in the fill width.
#[component]
pub fn ProgressBar(percentage: f64) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div
                class="progress-fill"
                style=format!("width: {:.1}%;", percentage)
            ></div>
        </div>
    }
}
