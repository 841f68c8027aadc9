use std::collections::HashMap;

use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Top-level surfaces of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Advisers,
}

impl Page {
    fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Advisers => "advisers",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "advisers" => Some(Page::Advisers),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
        }
    }

    pub fn open(&self, page: Page) {
        self.active.set(page);
    }

    /// Mirror the active page into the query string so reloads and shared
    /// links land on the same surface. Runs once per layout mount.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| Page::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch the history when the URL actually changed.
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
