use contracts::domain::adviser::{Adviser, AdviserId, AdviserUpdate, NewAdviser};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::adviser::state::AdvisersStore;

/// Raw form state; numeric fields stay as the user typed them and are
/// parsed when the save command runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdviserForm {
    pub id: Option<AdviserId>,
    pub name: String,
    pub last_name: String,
    pub sales: String,
    pub goal_value: String,
    pub active: bool,
    pub upt: String,
}

/// ViewModel for the adviser details form
#[derive(Clone, Copy)]
pub struct AdviserDetailsViewModel {
    pub form: RwSignal<AdviserForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    original: RwSignal<Option<Adviser>>,
}

impl AdviserDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AdviserForm {
                active: true,
                sales: "0".to_string(),
                ..AdviserForm::default()
            }),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            original: RwSignal::new(None),
        }
    }

    /// Seed the form from the adviser being edited, or leave the creation
    /// defaults in place.
    pub fn load(&self, adviser: Option<Adviser>) {
        if let Some(a) = adviser {
            self.form.set(AdviserForm {
                id: Some(a.id),
                name: a.name.clone(),
                last_name: a.last_name.clone(),
                sales: trim_float(a.sales),
                goal_value: trim_float(a.goal_value),
                active: a.active,
                upt: a.upt.clone().unwrap_or_default(),
            });
            self.original.set(Some(a));
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    /// Validate, build the right payload and persist through the store.
    /// Validation failures land in `self.error`; the dialog stays open.
    pub fn save_command(&self, store: AdvisersStore, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        let error = self.error;
        let saving = self.saving;
        let original = self.original.get_untracked();

        error.set(None);
        saving.set(true);

        spawn_local(async move {
            let result = match (form.id, original) {
                (Some(id), Some(before)) => {
                    let update = build_update(&form, &before);
                    if update.is_empty() {
                        // Nothing changed; treat as a successful no-op.
                        saving.set(false);
                        on_saved.run(());
                        return;
                    }
                    store.update_adviser(id, &update).await.map(|_| ())
                }
                _ => {
                    let draft = NewAdviser {
                        name: form.name.trim().to_string(),
                        last_name: form.last_name.trim().to_string(),
                        sales: parse_number(&form.sales),
                        goal_value: parse_number(&form.goal_value),
                        active: form.active,
                    };
                    store.create_adviser(&draft).await.map(|_| ())
                }
            };

            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

impl Default for AdviserDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Only fields that differ from the loaded adviser go into the update.
fn build_update(form: &AdviserForm, before: &Adviser) -> AdviserUpdate {
    let mut update = AdviserUpdate::new();

    let name = form.name.trim();
    if name != before.name {
        update = update.name(name);
    }
    let last_name = form.last_name.trim();
    if last_name != before.last_name {
        update = update.last_name(last_name);
    }

    let sales = parse_number(&form.sales);
    if sales != before.sales {
        update = update.sales(sales);
    }
    let goal_value = parse_number(&form.goal_value);
    if goal_value != before.goal_value {
        update = update.goal_value(goal_value);
    }

    if form.active != before.active {
        update = update.active(form.active);
    }

    let upt = form.upt.trim();
    if upt != before.upt.as_deref().unwrap_or_default() && !upt.is_empty() {
        update = update.upt(upt);
    }

    update
}

/// Empty or malformed input becomes NaN so the validator produces the
/// user-facing message instead of a parse error.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
