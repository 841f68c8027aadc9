mod dto;

pub use dto::{BestAdviser, DashboardMetrics};
