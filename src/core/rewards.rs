//! Rewards engine - milestone awards and the month-close operation.
//!
//! Two entry points drive the garden reward loop. The instant milestone
//! award runs after any savings contribution and grants each goal milestone
//! exactly once, gated by the pot's `last_milestone_reached` low-water mark.
//! The month-close operation scores every spending pot's leftover or
//! overspend, draws the reserve down to cover overspending, catches up any
//! savings milestones not yet granted instantly, credits the cycle total to
//! the global point balance, and resets the monthly counters. The close pass
//! always completes; it has no partial-failure mode.

use crate::entities::{Budget, Pot, PotKind, current_month_start};
use chrono::NaiveDate;
use tracing::info;

/// Points credited to the global balance for every recorded transaction
pub const ENGAGEMENT_BONUS_POINTS: i64 = 1;

/// Savings goal milestones and their one-time awards, in crossing order
pub const MILESTONES: [(f64, i64); 4] = [(0.25, 15), (0.50, 30), (0.75, 45), (1.00, 80)];

/// Spending leftover tiers, highest first; the first tier whose threshold
/// the leftover fraction meets wins (tiers are not cumulative)
pub const LEFTOVER_TIERS: [(f64, i64); 3] = [(0.20, 60), (0.10, 35), (0.05, 20)];

/// Award for landing exactly on the limit (zero leftover, not over)
pub const EXACT_SPEND_POINTS: i64 = 10;

/// Cycle point penalty for overspending a pot
pub const OVERSPEND_CYCLE_PENALTY: i64 = 20;

/// Plant point penalty for overspending a pot (floored at zero)
pub const OVERSPEND_PLANT_PENALTY: i64 = 10;

/// Points for a spending pot's leftover fraction at month close.
///
/// Scans the tier table high to low and returns the first qualifying award;
/// an exact landing on the limit earns a small consolation, and a leftover
/// below the lowest tier earns nothing.
#[must_use]
pub fn leftover_points(leftover_fraction: f64) -> i64 {
    for (threshold, points) in LEFTOVER_TIERS {
        if leftover_fraction >= threshold {
            return points;
        }
    }
    if leftover_fraction == 0.0 {
        EXACT_SPEND_POINTS
    } else {
        0
    }
}

/// Computes milestone crossings for a savings balance against its goal.
///
/// Returns the advanced low-water mark and the points for every milestone
/// between `last_milestone` (exclusive) and the current completion fraction
/// (inclusive). A single contribution that jumps several milestones earns
/// them all. A goal of zero (or less) awards nothing.
#[must_use]
pub fn milestone_awards(goal: f64, saved_total: f64, last_milestone: f64) -> (f64, i64) {
    if goal <= 0.0 {
        return (last_milestone, 0);
    }

    let fraction = (saved_total / goal).min(1.0);
    let mut reached = last_milestone;
    let mut points = 0;
    for (milestone, award) in MILESTONES {
        if fraction >= milestone && reached < milestone {
            points += award;
            reached = milestone;
        }
    }
    (reached, points)
}

/// Applies the milestone award to a savings pot: advances its low-water
/// mark, credits its plant points, and returns the awarded points for the
/// caller to credit globally. Returns 0 for any other pot kind.
pub fn award_savings_milestones(pot: &mut Pot) -> i64 {
    let PotKind::Savings {
        goal,
        saved_total,
        last_milestone_reached,
        ..
    } = &mut pot.kind
    else {
        return 0;
    };

    let (reached, points) = milestone_awards(*goal, *saved_total, *last_milestone_reached);
    *last_milestone_reached = reached;
    pot.plant_points += points;
    points
}

/// Outcome of the month-close pass for a single scored pot.
#[derive(Debug, Clone)]
pub enum PotCloseOutcome {
    /// Spending pot finished at or under its limit
    Leftover {
        /// Fraction of the limit left unspent (0.0 ..= 1.0)
        fraction: f64,
        /// Points awarded by the leftover tier table
        points: i64,
    },
    /// Spending pot went over its limit
    Overspent {
        /// Amount spent beyond the limit
        over: f64,
        /// Portion of the overspend covered by the reserve
        covered: f64,
        /// Cycle point delta (negative)
        points: i64,
    },
    /// Savings pot crossed one or more milestones since the last close
    Milestones {
        /// The new milestone low-water mark
        reached: f64,
        /// Points awarded for the crossed milestones
        points: i64,
    },
}

/// Result of the month-close pass for a single pot.
#[derive(Debug, Clone)]
pub struct PotCloseResult {
    /// Name of the pot that was scored
    pub pot_name: String,
    /// What happened to it
    pub outcome: PotCloseOutcome,
}

/// Result of closing out a month across all pots.
///
/// Contains an entry for every spending pot with a positive limit and for
/// every savings pot that crossed a milestone; pots that could not score
/// (zero limits, untouched goals, investment and reserve pots) are not
/// listed.
#[derive(Debug, Clone)]
pub struct MonthCloseResult {
    /// Per-pot outcomes, in pot order
    pub pot_results: Vec<PotCloseResult>,
    /// Net point delta credited to the global balance (may be negative)
    pub cycle_points: i64,
    /// Total drawn from the reserve to cover overspending
    pub reserve_drawn: f64,
    /// The new accounting period start (first of the current month)
    pub month_start: NaiveDate,
}

/// Closes out the month: scores every pot, adjusts the reserve, credits the
/// cycle total, and resets the monthly counters.
///
/// The pass visits pots in order. Overspent pots draw the reserve down
/// sequentially until it is exhausted; uncovered remainders are simply
/// unfunded. Every spending pot's `spent_this_month` resets to zero whether
/// or not it scored, so closing twice in a row is harmless: already granted
/// milestones stay granted and an untouched month scores as full leftover.
pub fn close_month(budget: &mut Budget) -> MonthCloseResult {
    let mut pot_results = Vec::new();
    let mut cycle_points = 0i64;
    let mut reserve_drawn = 0.0f64;

    let mut reserve_balance = budget
        .pots
        .iter()
        .find_map(|p| match p.kind {
            PotKind::Reserve { saved_total } => Some(saved_total),
            _ => None,
        })
        .unwrap_or(0.0);

    for pot in &mut budget.pots {
        match &mut pot.kind {
            PotKind::Spending {
                monthly_limit,
                spent_this_month,
            } => {
                let limit = *monthly_limit;
                let spent = *spent_this_month;
                if limit > 0.0 {
                    if spent <= limit {
                        let fraction = (limit - spent) / limit;
                        let points = leftover_points(fraction);
                        cycle_points += points;
                        pot.plant_points += points;
                        pot_results.push(PotCloseResult {
                            pot_name: pot.name.clone(),
                            outcome: PotCloseOutcome::Leftover { fraction, points },
                        });
                    } else {
                        let over = spent - limit;
                        let covered = over.min(reserve_balance);
                        reserve_balance -= covered;
                        reserve_drawn += covered;
                        cycle_points -= OVERSPEND_CYCLE_PENALTY;
                        pot.plant_points = (pot.plant_points - OVERSPEND_PLANT_PENALTY).max(0);
                        pot_results.push(PotCloseResult {
                            pot_name: pot.name.clone(),
                            outcome: PotCloseOutcome::Overspent {
                                over,
                                covered,
                                points: -OVERSPEND_CYCLE_PENALTY,
                            },
                        });
                    }
                }
                // Reset for the next month whether or not the pot scored
                *spent_this_month = 0.0;
            }
            PotKind::Savings { .. } => {
                let points = award_savings_milestones(pot);
                if points > 0 {
                    let reached = match pot.kind {
                        PotKind::Savings {
                            last_milestone_reached,
                            ..
                        } => last_milestone_reached,
                        _ => 0.0,
                    };
                    cycle_points += points;
                    pot_results.push(PotCloseResult {
                        pot_name: pot.name.clone(),
                        outcome: PotCloseOutcome::Milestones { reached, points },
                    });
                }
            }
            PotKind::Investment { .. } | PotKind::Reserve { .. } => {}
        }
    }

    if let Some(PotKind::Reserve { saved_total }) = budget
        .pots
        .iter_mut()
        .find(|p| p.is_reserve())
        .map(|p| &mut p.kind)
    {
        *saved_total = reserve_balance;
    }

    budget.points += cycle_points;
    budget.month_start = current_month_start();

    info!(
        cycle_points,
        reserve_drawn,
        scored_pots = pot_results.len(),
        "month closed"
    );

    MonthCloseResult {
        pot_results,
        cycle_points,
        reserve_drawn,
        month_start: budget.month_start,
    }
}

/// Formats a month-close result into a human-readable summary string.
/// Useful for logging or displaying the outcome of a close.
#[must_use]
pub fn format_close_summary(result: &MonthCloseResult) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Month closed - new period starts {} - {} pots scored, {:+} points\n",
        result.month_start.format("%Y-%m-%d"),
        result.pot_results.len(),
        result.cycle_points
    );

    for pot_result in &result.pot_results {
        // write! is infallible when writing to String, so unwrap is safe
        match &pot_result.outcome {
            PotCloseOutcome::Leftover { fraction, points } => writeln!(
                summary,
                "  {} - {:.0}% leftover | {:+} points",
                pot_result.pot_name,
                fraction * 100.0,
                points
            )
            .unwrap(),
            PotCloseOutcome::Overspent {
                over,
                covered,
                points,
            } => writeln!(
                summary,
                "  {} - overspent ${over:.2} (${covered:.2} covered by reserve) | {points:+} points",
                pot_result.pot_name
            )
            .unwrap(),
            PotCloseOutcome::Milestones { reached, points } => writeln!(
                summary,
                "  {} - reached {:.0}% of goal | {:+} points",
                pot_result.pot_name,
                reached * 100.0,
                points
            )
            .unwrap(),
        }
    }

    summary
}
