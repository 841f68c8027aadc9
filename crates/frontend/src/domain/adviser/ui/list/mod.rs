use contracts::domain::adviser::{Adviser, AdviserId};
use contracts::shared::sales_calc::{achievement_percentage, adviser_earnings, progress_percentage};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::details::AdviserDetails;
use super::modals::{
    EditGoalModal, MonthlySalesModal, SumSalesModal, UpdateAllGoalsModal, WeeklyComparisonModal,
};
use crate::domain::adviser::state::use_advisers_store;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::number_format::{format_currency, format_percentage, progress_color};

/// Which dialog is open, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenModal {
    Details(Option<AdviserId>),
    SumSales(AdviserId),
    Goal(AdviserId),
    MonthlySales(AdviserId),
    Weekly(AdviserId),
    AllGoals,
}

#[derive(Clone, Debug)]
struct AdviserRow {
    id: AdviserId,
    full_name: String,
    sales: String,
    current_month_sales: String,
    goal: String,
    progress: f64,
    achievement: f64,
    upt: String,
    earnings: String,
    active: bool,
}

impl From<Adviser> for AdviserRow {
    fn from(a: Adviser) -> Self {
        let month_sales = a.current_month_sales.unwrap_or(0.0);
        Self {
            id: a.id,
            full_name: a.full_name(),
            sales: format_currency(a.sales),
            current_month_sales: format_currency(month_sales),
            goal: format_currency(a.goal_value),
            // Bar fill is capped; the badge next to it is not.
            progress: progress_percentage(month_sales, a.goal_value),
            achievement: achievement_percentage(month_sales, a.goal_value),
            upt: a.upt.unwrap_or_else(|| "-".to_string()),
            earnings: format_currency(adviser_earnings(a.sales)),
            active: a.active,
        }
    }
}

#[component]
pub fn AdvisersPage() -> impl IntoView {
    let store = use_advisers_store();
    let advisers = store.advisers;
    let loading = store.loading;
    let error = store.error;

    let open_modal = RwSignal::new(None::<OpenModal>);

    store.fetch_advisers();

    // Deep link: ?adviser=<id> preselects an adviser in the info box.
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: std::collections::HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    if let Some(raw) = params.get("adviser") {
        match AdviserId::parse(raw) {
            Ok(id) => {
                spawn_local(async move {
                    store.fetch_adviser_by_id(id).await;
                });
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    let close = Callback::new(move |_: ()| open_modal.set(None));

    let handle_delete = move |id: AdviserId, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("¿Eliminar al asesor {}?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let _ = store.delete_adviser(id).await;
        });
    };

    let find_adviser =
        move |id: AdviserId| advisers.get_untracked().into_iter().find(|a| a.id == id);

    view! {
        <div class="advisers-page">
            <div class="page-header">
                <h2>"Asesores"</h2>
                <div class="page-actions">
                    <button
                        class="btn-secondary"
                        on:click=move |_| open_modal.set(Some(OpenModal::AllGoals))
                    >
                        "Actualizar todas las metas"
                    </button>
                    <button
                        class="btn-primary"
                        on:click=move |_| open_modal.set(Some(OpenModal::Details(None)))
                    >
                        "Nuevo asesor"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Cargando..."</div>
            </Show>

            <table class="advisers-table">
                <thead>
                    <tr>
                        <th>"Asesor"</th>
                        <th>"Ventas"</th>
                        <th>"Ventas del mes"</th>
                        <th>"Meta"</th>
                        <th>"Progreso"</th>
                        <th>"UPT"</th>
                        <th>"Comisión"</th>
                        <th>"Estado"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        advisers
                            .get()
                            .into_iter()
                            .map(AdviserRow::from)
                            .map(|row| {
                                let id = row.id;
                                let name_for_delete = row.full_name.clone();
                                let delete = handle_delete;
                                let achievement_class = progress_color(row.achievement);
                                let row_class = if row.active { "row" } else { "row row--inactive" };
                                view! {
                                    <tr class=row_class>
                                        <td
                                            class="cell-name"
                                            on:click=move |_| store.select_adviser(id)
                                        >
                                            {row.full_name.clone()}
                                        </td>
                                        <td class="cell-money">{row.sales.clone()}</td>
                                        <td class="cell-money">{row.current_month_sales.clone()}</td>
                                        <td class="cell-money">{row.goal.clone()}</td>
                                        <td class="cell-progress">
                                            <ProgressBar percentage=row.progress />
                                            <span class=format!(
                                                "achievement-badge {}",
                                                achievement_class,
                                            )>{format_percentage(row.achievement, 1)}</span>
                                        </td>
                                        <td>{row.upt.clone()}</td>
                                        <td class="cell-money">{row.earnings.clone()}</td>
                                        <td>
                                            {if row.active { "Activo" } else { "Inactivo" }}
                                        </td>
                                        <td class="cell-actions">
                                            <button
                                                title="Editar"
                                                on:click=move |_| {
                                                    open_modal.set(Some(OpenModal::Details(Some(id))))
                                                }
                                            >
                                                "Editar"
                                            </button>
                                            <button
                                                title="Sumar venta"
                                                on:click=move |_| {
                                                    open_modal.set(Some(OpenModal::SumSales(id)))
                                                }
                                            >
                                                "Venta"
                                            </button>
                                            <button
                                                title="Actualizar meta"
                                                on:click=move |_| {
                                                    open_modal.set(Some(OpenModal::Goal(id)))
                                                }
                                            >
                                                "Meta"
                                            </button>
                                            <button
                                                title="Ventas del mes"
                                                on:click=move |_| {
                                                    open_modal.set(Some(OpenModal::MonthlySales(id)))
                                                }
                                            >
                                                "Mes"
                                            </button>
                                            <button
                                                title="Comparación semanal"
                                                on:click=move |_| {
                                                    open_modal.set(Some(OpenModal::Weekly(id)))
                                                }
                                            >
                                                "Semanal"
                                            </button>
                                            <button
                                                title="Eliminar"
                                                class="btn-danger"
                                                on:click=move |_| delete(id, name_for_delete.clone())
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <AdviserInfoBox />

            {move || {
                open_modal
                    .get()
                    .map(|modal| match modal {
                        OpenModal::Details(id) => {
                            let adviser = id.and_then(find_adviser);
                            view! { <AdviserDetails adviser=adviser on_close=close /> }.into_any()
                        }
                        OpenModal::SumSales(id) => {
                            match find_adviser(id) {
                                Some(adviser) => {
                                    view! { <SumSalesModal adviser=adviser on_close=close /> }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }
                        }
                        OpenModal::Goal(id) => {
                            match find_adviser(id) {
                                Some(adviser) => {
                                    view! { <EditGoalModal adviser=adviser on_close=close /> }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }
                        }
                        OpenModal::MonthlySales(id) => {
                            match find_adviser(id) {
                                Some(adviser) => {
                                    view! { <MonthlySalesModal adviser=adviser on_close=close /> }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }
                        }
                        OpenModal::Weekly(id) => {
                            match find_adviser(id) {
                                Some(adviser) => {
                                    view! {
                                        <WeeklyComparisonModal adviser=adviser on_close=close />
                                    }
                                        .into_any()
                                }
                                None => ().into_any(),
                            }
                        }
                        OpenModal::AllGoals => {
                            view! { <UpdateAllGoalsModal on_close=close /> }.into_any()
                        }
                    })
            }}
        </div>
    }
}

/// Summary panel for the adviser picked in the table.
#[component]
fn AdviserInfoBox() -> impl IntoView {
    let store = use_advisers_store();
    let current = store.current_adviser;

    view! {
        {move || {
            current
                .get()
                .map(|a| {
                    let id = a.id;
                    let month_sales = a.current_month_sales.unwrap_or(0.0);
                    let progress = progress_percentage(month_sales, a.goal_value);
                    let achievement = achievement_percentage(month_sales, a.goal_value);
                    view! {
                        <div class="adviser-info-box">
                            <div class="info-box__header">
                                <h3>{a.full_name()}</h3>
                                <div>
                                    <button
                                        title="Recargar"
                                        on:click=move |_| {
                                            spawn_local(async move {
                                                store.fetch_adviser_by_id(id).await;
                                            });
                                        }
                                    >
                                        "Actualizar"
                                    </button>
                                    <button
                                        title="Cerrar"
                                        on:click=move |_| store.clear_selected_adviser()
                                    >
                                        "×"
                                    </button>
                                </div>
                            </div>
                            <div class="info-box__row">
                                <span>"Ventas acumuladas"</span>
                                <strong>{format_currency(a.sales)}</strong>
                            </div>
                            <div class="info-box__row">
                                <span>"Ventas del mes"</span>
                                <strong>{format_currency(month_sales)}</strong>
                            </div>
                            <div class="info-box__row">
                                <span>"Meta"</span>
                                <strong>{format_currency(a.goal_value)}</strong>
                            </div>
                            <div class="info-box__row">
                                <span>"Comisión estimada"</span>
                                <strong>{format_currency(adviser_earnings(a.sales))}</strong>
                            </div>
                            <div class="info-box__progress">
                                <ProgressBar percentage=progress />
                                <span class=format!(
                                    "achievement-badge {}",
                                    progress_color(achievement),
                                )>{format_percentage(achievement, 1)}</span>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
