//! Shared test utilities for `GardenBudget`.
//!
//! This module provides common helper functions for building test budgets
//! and creating pots and transactions with sensible defaults.

use crate::{
    core::{pot, transaction},
    entities::{Budget, PotKind, Transaction},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Fixed accounting period start used by test budgets.
#[must_use]
pub fn fixed_month_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap_or_default()
}

/// Fixed timestamp inside the test accounting period.
#[must_use]
pub fn test_timestamp() -> DateTime<Utc> {
    "2026-08-03T12:00:00Z".parse().unwrap_or_default()
}

/// Creates a fresh budget with the seeded reserve and a fixed period start.
/// This is the standard setup for all core tests.
#[must_use]
pub fn test_budget() -> Budget {
    Budget::new(fixed_month_start())
}

/// Creates a spending pot and returns its id.
pub fn add_spending_pot(budget: &mut Budget, name: &str, monthly_limit: f64) -> Result<i64> {
    let created = pot::create_pot(budget, name.to_string(), PotKind::spending(monthly_limit))?;
    Ok(created.id)
}

/// Creates a savings pot with no planned contribution and returns its id.
pub fn add_savings_pot(budget: &mut Budget, name: &str, goal: f64) -> Result<i64> {
    add_savings_pot_with_contrib(budget, name, goal, 0.0)
}

/// Creates a savings pot with a planned monthly contribution.
pub fn add_savings_pot_with_contrib(
    budget: &mut Budget,
    name: &str,
    goal: f64,
    monthly_contrib: f64,
) -> Result<i64> {
    let created = pot::create_pot(
        budget,
        name.to_string(),
        PotKind::savings(goal, monthly_contrib),
    )?;
    Ok(created.id)
}

/// Creates an investment pot and returns its id.
pub fn add_investment_pot(budget: &mut Budget, name: &str, monthly_contrib: f64) -> Result<i64> {
    let created = pot::create_pot(
        budget,
        name.to_string(),
        PotKind::investment(monthly_contrib),
    )?;
    Ok(created.id)
}

/// Records a transaction with a default merchant and timestamp.
pub fn record(budget: &mut Budget, pot_id: i64, amount: f64) -> Result<Transaction> {
    transaction::record_transaction(
        budget,
        pot_id,
        "Test merchant".to_string(),
        amount,
        test_timestamp(),
    )
}

/// Sets the reserve balance directly, without the transaction path. Keeps
/// reward tests free of engagement-bonus noise in their point accounting.
pub fn set_reserve_balance(budget: &mut Budget, amount: f64) {
    if let Some(PotKind::Reserve { saved_total }) = budget
        .pots
        .iter_mut()
        .find(|p| p.is_reserve())
        .map(|p| &mut p.kind)
    {
        *saved_total = amount;
    }
}
