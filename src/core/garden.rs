//! Garden business logic - plant growth stage upgrades.
//!
//! Each non-reserve pot grows a plant through five stages. Advancing a stage
//! is an explicit action that spends global points according to a fixed cost
//! schedule and feeds half the cost back into the pot's plant points. Stages
//! never regress and the final stage is terminal.

use crate::{
    entities::{Budget, Stage},
    errors::{Error, Result},
};

/// Points needed to reach each stage, indexed by the target stage.
/// Seedling is free (every pot starts there); reaching Majestic costs 200.
pub const STAGE_COSTS: [i64; 5] = [0, 20, 50, 100, 200];

/// Result of a successful plant upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeResult {
    /// Name of the upgraded pot
    pub pot_name: String,
    /// The stage the plant advanced to
    pub stage: Stage,
    /// Points debited from the global balance
    pub cost: i64,
    /// Plant points credited to the pot (half the cost, rounded down)
    pub plant_points_gained: i64,
}

/// Cost of advancing a plant one stage from `current`, or `None` when the
/// plant is already at the terminal stage.
#[must_use]
pub fn upgrade_cost(current: Stage) -> Option<i64> {
    current
        .next()
        .map(|next| STAGE_COSTS[usize::from(u8::from(next))])
}

/// Advances a pot's plant by exactly one stage, debiting the global point
/// balance by the stage cost and crediting the pot's plant points with half
/// of it.
///
/// # Errors
/// * `PotNotFound` - `pot_id` does not resolve
/// * `NotAllowed` - the pot is the reserve, or already at the terminal stage
/// * `InsufficientPoints` - the global balance cannot cover the cost
pub fn upgrade_plant(budget: &mut Budget, pot_id: i64) -> Result<UpgradeResult> {
    let index = budget
        .pots
        .iter()
        .position(|p| p.id == pot_id)
        .ok_or(Error::PotNotFound { id: pot_id })?;

    let pot = &budget.pots[index];
    if pot.is_reserve() {
        return Err(Error::NotAllowed {
            message: "The reserve pot has no plant to upgrade".to_string(),
        });
    }
    let Some(next) = pot.stage.next() else {
        return Err(Error::NotAllowed {
            message: format!("Pot '{}' is already at the max stage", pot.name),
        });
    };

    let cost = STAGE_COSTS[usize::from(u8::from(next))];
    if budget.points < cost {
        return Err(Error::InsufficientPoints {
            required: cost,
            available: budget.points,
        });
    }

    let gained = cost / 2;
    budget.points -= cost;
    let pot = &mut budget.pots[index];
    pot.stage = next;
    pot.plant_points += gained;

    Ok(UpgradeResult {
        pot_name: pot.name.clone(),
        stage: next,
        cost,
        plant_points_gained: gained,
    })
}
