//! Transaction business logic - Handles transaction recording and listing.
//!
//! Recording a transaction applies its amount to the owning pot's running
//! balance according to the pot's kind, triggers the instant savings
//! milestone award where applicable, and credits the per-action engagement
//! bonus to the global point balance. Validation precedes every mutation, so
//! a rejected transaction leaves the budget untouched.

use crate::{
    core::rewards,
    entities::{Budget, PotKind, Transaction},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};

/// Records a new transaction against a pot and applies it to the pot's
/// running balance.
///
/// Spending pots accumulate into `spent_this_month`; savings, investment,
/// and reserve pots accumulate into `saved_total`. A savings contribution
/// immediately awards any goal milestones it crosses. Every successful
/// transaction also credits the engagement bonus to the global points.
/// Returns a clone of the stored transaction.
///
/// # Errors
/// * `InvalidAmount` - amount is zero, negative, or not finite
/// * `PotNotFound` - `pot_id` does not resolve
pub fn record_transaction(
    budget: &mut Budget,
    pot_id: i64,
    merchant: String,
    amount: f64,
    occurred_at: DateTime<Utc>,
) -> Result<Transaction> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    let pot = budget
        .pot_mut(pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;

    match &mut pot.kind {
        PotKind::Spending {
            spent_this_month, ..
        } => *spent_this_month += amount,
        PotKind::Savings { saved_total, .. }
        | PotKind::Investment { saved_total, .. }
        | PotKind::Reserve { saved_total } => *saved_total += amount,
    }

    // No-op for anything but a savings pot
    let milestone_points = rewards::award_savings_milestones(pot);
    budget.points += milestone_points + rewards::ENGAGEMENT_BONUS_POINTS;

    let transaction = Transaction {
        id: budget.next_transaction_id(),
        merchant,
        amount,
        pot_id,
        occurred_at,
    };
    budget.transactions.push(transaction.clone());
    Ok(transaction)
}

/// All transactions for a pot, ordered by timestamp (newest first).
#[must_use]
pub fn get_transactions_for_pot(budget: &Budget, pot_id: i64) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = budget
        .transactions
        .iter()
        .filter(|t| t.pot_id == pot_id)
        .cloned()
        .collect();
    transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    transactions
}
