pub mod all_goals;
pub mod goal;
pub mod monthly_sales;
pub mod sum_sales;
pub mod weekly_comparison;

pub use all_goals::UpdateAllGoalsModal;
pub use goal::EditGoalModal;
pub use monthly_sales::MonthlySalesModal;
pub use sum_sales::SumSalesModal;
pub use weekly_comparison::WeeklyComparisonModal;
