use std::rc::Rc;

use crate::domain::adviser::{AdviserId, AdviserRepository};
use crate::error::AppResult;

/// Overwrite an adviser's recorded sales for a (year, month).
///
/// Deliberately a passthrough: none of the period or sign checks its
/// sibling operations have. Flagged in DESIGN.md rather than fixed, since
/// tightening it would reject inputs the backend currently accepts.
pub struct UpdateMonthlySalesUseCase {
    repository: Rc<dyn AdviserRepository>,
}

impl UpdateMonthlySalesUseCase {
    pub fn new(repository: Rc<dyn AdviserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        adviser_id: AdviserId,
        year: i32,
        month: u32,
        total_sales: f64,
    ) -> AppResult<()> {
        self.repository
            .update_monthly_sales(adviser_id, year, month, total_sales)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::adviser::repository::MockAdviserRepository;

    #[tokio::test]
    async fn passes_arguments_through_unchecked() {
        let mut mock = MockAdviserRepository::new();
        mock.expect_update_monthly_sales()
            .withf(|id, year, month, total| {
                *id == AdviserId::new(3) && *year == 1990 && *month == 42 && *total == -1.0
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        // Out-of-range period and negative amount are accepted on purpose.
        UpdateMonthlySalesUseCase::new(Rc::new(mock))
            .execute(AdviserId::new(3), 1990, 42, -1.0)
            .await
            .unwrap();
    }
}
