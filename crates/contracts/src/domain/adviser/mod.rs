//! Adviser aggregate: entity, creation/update payloads, validation rules
//! and the repository contract the HTTP adapter implements.

pub mod aggregate;
pub mod repository;
pub mod requests;
pub mod update;
pub mod validator;

pub use aggregate::{Adviser, AdviserId, MonthlySummary, NewAdviser};
pub use repository::AdviserRepository;
pub use update::AdviserUpdate;
pub use validator::AdviserValidator;
