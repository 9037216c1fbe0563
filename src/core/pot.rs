//! Pot business logic - Handles all pot-related operations.
//!
//! Provides functions for creating, retrieving, editing, and deleting pots.
//! Creation enforces the structural invariants of the ledger: names must be
//! non-empty, planned amounts non-negative, and at most one reserve pot may
//! exist. Deletion cascades over the pot's transactions.

use crate::{
    entities::{Budget, Pot, PotKind},
    errors::{Error, Result},
};

/// Creates a new pot with the given name and kind, performing input validation.
///
/// Monthly counters and balances always start at zero regardless of what the
/// caller put into `kind`; only the planned parameters (limit, goal,
/// contribution) are taken from it. Returns a clone of the stored pot.
///
/// # Errors
/// * `InvalidName` - name is empty or whitespace-only
/// * `InvalidAmount` - a planned amount is negative or not finite
/// * `NotAllowed` - `kind` is `Reserve` and a reserve pot already exists
pub fn create_pot(budget: &mut Budget, name: String, kind: PotKind) -> Result<Pot> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::InvalidName {
            message: "Pot name cannot be empty".to_string(),
        });
    }

    let kind = match kind {
        PotKind::Spending { monthly_limit, .. } => {
            validate_planned_amount(monthly_limit)?;
            PotKind::spending(monthly_limit)
        }
        PotKind::Savings {
            goal,
            monthly_contrib,
            ..
        } => {
            validate_planned_amount(goal)?;
            validate_planned_amount(monthly_contrib)?;
            PotKind::savings(goal, monthly_contrib)
        }
        PotKind::Investment { monthly_contrib, .. } => {
            validate_planned_amount(monthly_contrib)?;
            PotKind::investment(monthly_contrib)
        }
        PotKind::Reserve { .. } => {
            if budget.pots.iter().any(Pot::is_reserve) {
                return Err(Error::NotAllowed {
                    message: "A reserve pot already exists".to_string(),
                });
            }
            PotKind::reserve()
        }
    };

    let pot = Pot::new(budget.next_pot_id(), name, kind);
    budget.pots.push(pot.clone());
    Ok(pot)
}

/// Deletes a pot and cascades deletion over its transactions.
///
/// Returns the number of transactions removed by the cascade.
///
/// # Errors
/// * `PotNotFound` - no pot with the given id exists
/// * `NotAllowed` - the pot is the reserve
pub fn delete_pot(budget: &mut Budget, pot_id: i64) -> Result<usize> {
    let pot = budget
        .pot(pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;
    if pot.is_reserve() {
        return Err(Error::NotAllowed {
            message: "The reserve pot cannot be deleted".to_string(),
        });
    }

    budget.pots.retain(|p| p.id != pot_id);
    let before = budget.transactions.len();
    budget.transactions.retain(|t| t.pot_id != pot_id);
    Ok(before - budget.transactions.len())
}

/// Finds a pot by name, returning `None` if no pot matches.
#[must_use]
pub fn get_pot_by_name<'a>(budget: &'a Budget, name: &str) -> Option<&'a Pot> {
    budget.pots.iter().find(|p| p.name == name)
}

/// The reserve pot. Present in any budget that went through construction or
/// loading; returns `StateCorrupt` if a caller managed to bypass both.
pub fn reserve_pot(budget: &Budget) -> Result<&Pot> {
    budget
        .pots
        .iter()
        .find(|p| p.is_reserve())
        .ok_or_else(|| Error::StateCorrupt {
            message: "No reserve pot in budget state".to_string(),
        })
}

/// Renames a pot, with the same name validation as creation.
pub fn rename_pot(budget: &mut Budget, pot_id: i64, name: String) -> Result<Pot> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::InvalidName {
            message: "Pot name cannot be empty".to_string(),
        });
    }
    let pot = budget
        .pot_mut(pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;
    pot.name = name;
    Ok(pot.clone())
}

/// Updates the monthly limit of a spending pot.
///
/// # Errors
/// * `NotAllowed` - the pot is not a spending pot
pub fn set_monthly_limit(budget: &mut Budget, pot_id: i64, limit: f64) -> Result<Pot> {
    validate_planned_amount(limit)?;
    let pot = budget
        .pot_mut(pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;
    let PotKind::Spending { monthly_limit, .. } = &mut pot.kind else {
        return Err(Error::NotAllowed {
            message: format!("Pot '{}' is not a spending pot", pot.name),
        });
    };
    *monthly_limit = limit;
    Ok(pot.clone())
}

/// Updates the goal of a savings pot. Lowering the goal below an already
/// reached milestone does not re-award points: the milestone mark stays.
///
/// # Errors
/// * `NotAllowed` - the pot is not a savings pot
pub fn set_goal(budget: &mut Budget, pot_id: i64, new_goal: f64) -> Result<Pot> {
    validate_planned_amount(new_goal)?;
    let pot = budget
        .pot_mut(pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;
    let PotKind::Savings { goal, .. } = &mut pot.kind else {
        return Err(Error::NotAllowed {
            message: format!("Pot '{}' is not a savings pot", pot.name),
        });
    };
    *goal = new_goal;
    Ok(pot.clone())
}

fn validate_planned_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
