//! Report and planning business logic.
//!
//! Read-only projections over the budget state - per-kind totals, planned
//! allocation versus income, and savings progress - plus the income target
//! setter they are measured against. All functions return structured data
//! or plain strings that the rendering collaborator can display directly.

use crate::{
    entities::{Budget, PotKind},
    errors::{Error, Result},
};

/// Per-kind money totals across the whole budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of `spent_this_month` across spending pots
    pub spent: f64,
    /// Sum of `saved_total` across savings pots
    pub saved: f64,
    /// Sum of `saved_total` across investment pots
    pub invested: f64,
    /// The reserve balance
    pub reserve: f64,
}

/// Computes the per-kind totals. Pure projection, no side effects.
#[must_use]
pub fn totals(budget: &Budget) -> Totals {
    let mut result = Totals {
        spent: 0.0,
        saved: 0.0,
        invested: 0.0,
        reserve: 0.0,
    };
    for pot in &budget.pots {
        match pot.kind {
            PotKind::Spending {
                spent_this_month, ..
            } => result.spent += spent_this_month,
            PotKind::Savings { saved_total, .. } => result.saved += saved_total,
            PotKind::Investment { saved_total, .. } => result.invested += saved_total,
            PotKind::Reserve { saved_total } => result.reserve += saved_total,
        }
    }
    result
}

/// Sum of all planned monthly amounts: spending limits plus savings and
/// investment contributions. Informational only, never enforced as a cap.
#[must_use]
pub fn assigned_planned(budget: &Budget) -> f64 {
    budget
        .pots
        .iter()
        .map(|pot| match pot.kind {
            PotKind::Spending { monthly_limit, .. } => monthly_limit,
            PotKind::Savings {
                monthly_contrib, ..
            }
            | PotKind::Investment {
                monthly_contrib, ..
            } => monthly_contrib,
            PotKind::Reserve { .. } => 0.0,
        })
        .sum()
}

/// Income not yet assigned to any pot's plan. May be negative when the plan
/// exceeds the income target.
#[must_use]
pub fn unassigned_income(budget: &Budget) -> f64 {
    budget.income_monthly - assigned_planned(budget)
}

/// Sets the monthly income target.
///
/// # Errors
/// * `InvalidAmount` - amount is negative or not finite
pub fn set_income(budget: &mut Budget, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    budget.income_monthly = amount;
    Ok(())
}

/// Calculates goal progress percentage from a saved balance and its goal.
///
/// - 0% = nothing saved
/// - 100% = goal reached (values beyond the goal are not clamped here)
/// - A zero goal reports 0%
#[must_use]
pub fn calculate_progress(saved_total: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        return 0.0;
    }

    (saved_total / goal) * 100.0
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// Formats a one-screen status summary of the budget: period, points,
/// totals, and the planning headroom. Used by the startup log.
#[must_use]
pub fn format_status_summary(budget: &Budget) -> String {
    use std::fmt::Write;

    let t = totals(budget);
    let mut summary = format!(
        "Budget period starting {} | {} points\n",
        budget.month_start.format("%Y-%m-%d"),
        budget.points
    );

    // write! is infallible when writing to String, so unwrap is safe
    writeln!(
        summary,
        "  Spent ${:.2} | Saved ${:.2} | Invested ${:.2} | Reserve ${:.2}",
        t.spent, t.saved, t.invested, t.reserve
    )
    .unwrap();
    writeln!(
        summary,
        "  Planned ${:.2} of ${:.2} income (${:.2} unassigned)",
        assigned_planned(budget),
        budget.income_monthly,
        unassigned_income(budget)
    )
    .unwrap();
    write!(
        summary,
        "  {} pots, {} transactions",
        budget.pots.len(),
        budget.transactions.len()
    )
    .unwrap();

    summary
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::pot::reserve_pot;
    use crate::test_utils::*;

    #[test]
    fn test_totals_sums_each_kind() -> crate::errors::Result<()> {
        let mut budget = test_budget();
        let food = add_spending_pot(&mut budget, "Food", 250.0)?;
        let fun = add_spending_pot(&mut budget, "Fun", 100.0)?;
        let trip = add_savings_pot(&mut budget, "Trip", 1000.0)?;
        let fund = add_investment_pot(&mut budget, "Index Fund", 200.0)?;
        let reserve = reserve_pot(&budget)?.id;

        record(&mut budget, food, 30.0)?;
        record(&mut budget, fun, 20.0)?;
        record(&mut budget, trip, 150.0)?;
        record(&mut budget, fund, 200.0)?;
        record(&mut budget, reserve, 40.0)?;

        let t = totals(&budget);
        assert_eq!(t.spent, 50.0);
        assert_eq!(t.saved, 150.0);
        assert_eq!(t.invested, 200.0);
        assert_eq!(t.reserve, 40.0);
        Ok(())
    }

    #[test]
    fn test_assigned_and_unassigned_income() -> crate::errors::Result<()> {
        let mut budget = test_budget();
        add_spending_pot(&mut budget, "Food", 250.0)?;
        add_savings_pot_with_contrib(&mut budget, "Trip", 1000.0, 100.0)?;
        add_investment_pot(&mut budget, "Index Fund", 150.0)?;
        set_income(&mut budget, 600.0)?;

        assert_eq!(assigned_planned(&budget), 500.0);
        assert_eq!(unassigned_income(&budget), 100.0);

        // Over-planning is allowed and reported as negative headroom
        set_income(&mut budget, 400.0)?;
        assert_eq!(unassigned_income(&budget), -100.0);
        Ok(())
    }

    #[test]
    fn test_set_income_validation() {
        let mut budget = test_budget();
        assert!(matches!(
            set_income(&mut budget, -1.0).unwrap_err(),
            Error::InvalidAmount { amount: -1.0 }
        ));
        assert!(matches!(
            set_income(&mut budget, f64::NAN).unwrap_err(),
            Error::InvalidAmount { .. }
        ));
        assert_eq!(budget.income_monthly, 0.0);
    }

    #[test]
    fn test_calculate_progress() {
        assert_eq!(calculate_progress(0.0, 1000.0), 0.0);
        assert_eq!(calculate_progress(500.0, 1000.0), 50.0);
        assert_eq!(calculate_progress(1000.0, 1000.0), 100.0);
        // Zero goal reports zero rather than dividing
        assert_eq!(calculate_progress(500.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_progress_bar() {
        let bar = format_progress_bar(80.0, None);
        assert!(bar.starts_with('['));
        assert!(bar.contains("80.0%"));
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 8);
        assert_eq!(bar.chars().filter(|&c| c == '░').count(), 2);

        // Values beyond 100% fill the bar completely
        let bar = format_progress_bar(150.0, Some(4));
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 4);
    }

    #[test]
    fn test_format_status_summary() -> crate::errors::Result<()> {
        let mut budget = test_budget();
        let food = add_spending_pot(&mut budget, "Food", 250.0)?;
        record(&mut budget, food, 30.0)?;
        set_income(&mut budget, 3000.0)?;

        let summary = format_status_summary(&budget);
        assert!(summary.contains("2026-08-01"));
        assert!(summary.contains("Spent $30.00"));
        assert!(summary.contains("2 pots, 1 transactions"));
        Ok(())
    }
}
