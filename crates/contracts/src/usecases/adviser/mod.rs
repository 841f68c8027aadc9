//! One use case per adviser operation. Each owns its preconditions and
//! delegates persistence to the injected [`AdviserRepository`].
//!
//! [`AdviserRepository`]: crate::domain::adviser::AdviserRepository

pub mod create_adviser;
pub mod delete_adviser;
pub mod get_adviser_by_id;
pub mod get_all_advisers;
pub mod get_dashboard_metrics;
pub mod handle_sum;
pub mod update_adviser;
pub mod update_all_goals;
pub mod update_goal;
pub mod update_monthly_sales;

pub use create_adviser::CreateAdviserUseCase;
pub use delete_adviser::DeleteAdviserUseCase;
pub use get_adviser_by_id::GetAdviserByIdUseCase;
pub use get_all_advisers::GetAllAdvisersUseCase;
pub use get_dashboard_metrics::GetDashboardMetricsUseCase;
pub use handle_sum::HandleSumUseCase;
pub use update_adviser::UpdateAdviserUseCase;
pub use update_all_goals::UpdateAllGoalsUseCase;
pub use update_goal::UpdateGoalUseCase;
pub use update_monthly_sales::UpdateMonthlySalesUseCase;
