use async_trait::async_trait;

use super::aggregate::{Adviser, AdviserId, NewAdviser};
use super::update::AdviserUpdate;
use crate::dashboards::metrics::DashboardMetrics;
use crate::error::AppResult;

#[cfg(test)]
use mockall::automock;

/// Persistence contract for advisers, implemented over HTTP by the
/// frontend adapter and mocked in use-case tests.
///
/// `?Send`: the wasm implementation is built on browser fetch futures,
/// which are not `Send`; everything runs on the single UI thread.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait AdviserRepository {
    async fn get_all(&self) -> AppResult<Vec<Adviser>>;

    /// `Ok(None)` when the backend answers 404.
    async fn get_by_id(&self, id: AdviserId) -> AppResult<Option<Adviser>>;

    async fn create(&self, adviser: &NewAdviser) -> AppResult<Adviser>;

    async fn update(&self, id: AdviserId, update: &AdviserUpdate) -> AppResult<Adviser>;

    async fn delete(&self, id: AdviserId) -> AppResult<()>;

    /// Register a sale for the adviser, stamped with the current time.
    async fn add_sale(&self, adviser_id: AdviserId, amount: f64) -> AppResult<()>;

    async fn update_goal(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        goal: f64,
    ) -> AppResult<()>;

    async fn update_monthly_sales(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        total_sales: f64,
    ) -> AppResult<()>;

    async fn update_all_goals(&self, year: i32, month: u32, goal: f64) -> AppResult<()>;

    /// `Ok(None)` when the backend has no metrics for the period.
    async fn get_dashboard_metrics(
        &self,
        year: i32,
        month: u32,
    ) -> AppResult<Option<DashboardMetrics>>;
}
