//! Adviser create/edit dialog.
//!
//! MVVM split:
//! - view_model.rs: form state, validation surface and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AdviserDetails;
pub use view_model::AdviserDetailsViewModel;
