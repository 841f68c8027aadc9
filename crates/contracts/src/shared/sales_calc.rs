//! Derived sales metrics.
//!
//! Gross figures include VAT; commissions are paid on the net amount.
//! Both rates are store-wide constants, not per-adviser settings.

/// Colombian VAT rate applied to gross sales figures.
pub const IVA_RATE: f64 = 0.19;

/// Commission paid on net (VAT-stripped) sales.
pub const COMMISSION_RATE: f64 = 0.01;

/// Commission earned on a gross sales figure.
///
/// Net first, then commission; keep the division before the
/// multiplication so the result matches historical payout reports.
pub fn adviser_earnings(gross_sales: f64) -> f64 {
    let net_sales = gross_sales / (1.0 + IVA_RATE);
    net_sales * COMMISSION_RATE
}

/// Progress toward a goal, capped at 100. Drives progress-bar fill.
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    ((current / goal) * 100.0).min(100.0)
}

/// Goal achievement, uncapped. Drives badge/label text, which may read
/// over 100% when an adviser beats the goal.
pub fn achievement_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal) * 100.0
}

/// Week-over-week growth, percent. Zero when there is no previous week
/// to compare against.
pub fn weekly_growth(current_week: f64, previous_week: f64) -> f64 {
    if previous_week <= 0.0 {
        return 0.0;
    }
    ((current_week - previous_week) / previous_week) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earnings_of_zero_is_zero() {
        assert_eq!(adviser_earnings(0.0), 0.0);
    }

    #[test]
    fn earnings_strip_vat_then_apply_commission() {
        // 119 gross -> 100 net -> 1% commission = 1.00
        let earnings = adviser_earnings(119.0);
        assert!((earnings - 1.0).abs() < 1e-9);
    }

    #[test]
    fn progress_with_no_goal_is_zero() {
        assert_eq!(progress_percentage(500.0, 0.0), 0.0);
        assert_eq!(progress_percentage(500.0, -10.0), 0.0);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        assert_eq!(progress_percentage(150.0, 100.0), 100.0);
        assert_eq!(progress_percentage(50.0, 100.0), 50.0);
    }

    #[test]
    fn achievement_is_uncapped() {
        assert_eq!(achievement_percentage(150.0, 100.0), 150.0);
        assert_eq!(achievement_percentage(150.0, 0.0), 0.0);
    }

    #[test]
    fn weekly_growth_handles_empty_previous_week() {
        assert_eq!(weekly_growth(1000.0, 0.0), 0.0);
    }

    #[test]
    fn weekly_growth_signed() {
        assert_eq!(weekly_growth(150.0, 100.0), 50.0);
        assert_eq!(weekly_growth(50.0, 100.0), -50.0);
    }
}
