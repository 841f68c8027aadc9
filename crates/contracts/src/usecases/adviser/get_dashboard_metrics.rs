use std::rc::Rc;

use crate::dashboards::metrics::DashboardMetrics;
use crate::domain::adviser::AdviserRepository;
use crate::error::{AppError, AppResult};

/// Fetch the aggregated dashboard figures for a (year, month).
pub struct GetDashboardMetricsUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl GetDashboardMetricsUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, year: i32, month: u32) -> AppResult<DashboardMetrics> {
        self.repository
            .get_dashboard_metrics(year, month)
            .await?
            .ok_or_else(|| AppError::not_found("No se pudieron obtener las métricas"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    #[tokio::test]
    async fn missing_metrics_is_an_error() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_dashboard_metrics().returning(|_, _| Ok(None));
        let use_case = GetDashboardMetricsUseCase::new(Rc::new(mock));

        let err = use_case.execute(2024, 6).await.unwrap_err();
        assert_eq!(
            err,
            AppError::NotFound("No se pudieron obtener las métricas".into())
        );
    }

    #[tokio::test]
    async fn returns_metrics_for_the_period() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_get_dashboard_metrics().returning(|_, _| {
            Ok(Some(DashboardMetrics {
                total_sales: 10_000_000.0,
                total_goal: 20_000_000.0,
                active_advisers: 4,
                goal_achievement: 50.0,
                average_sales: 2_500_000.0,
                best_adviser: None,
                best_upt_adviser: None,
            }))
        });
        let use_case = GetDashboardMetricsUseCase::new(Rc::new(mock));

        let metrics = use_case.execute(2024, 6).await.unwrap();
        assert_eq!(metrics.active_advisers, 4);
    }
}
