pub mod dashboards;
pub mod domain;
pub mod error;
pub mod shared;
pub mod system;
pub mod usecases;

pub use error::{AppError, AppResult};
