//! Budget entity - The single owned state record for a budgeting session.
//!
//! The budget holds the accounting period start, the global point balance,
//! the informational monthly income target, and the ordered pot and
//! transaction collections. Every core operation takes the budget as an
//! explicit `&mut` handle; there is no ambient global state, so tests can
//! run any number of independent instances.

use crate::entities::{Pot, PotKind, Transaction};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Name given to the auto-created reserve pot
pub const RESERVE_POT_NAME: &str = "Reserve";

/// The complete budget state: one record per persisted store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// First day of the current accounting period
    pub month_start: NaiveDate,
    /// Global reward currency; may go negative after a penalized close
    #[serde(default)]
    pub points: i64,
    /// Monthly income target (informational, never enforced)
    #[serde(default)]
    pub income_monthly: f64,
    /// All pots, in creation order
    #[serde(default)]
    pub pots: Vec<Pot>,
    /// All transactions, in creation order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// First day of the month containing today's date.
#[must_use]
pub fn current_month_start() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.with_day(1).unwrap_or(today)
}

impl Budget {
    /// Creates a fresh budget for the given accounting period, with the
    /// reserve pot already seeded.
    #[must_use]
    pub fn new(month_start: NaiveDate) -> Self {
        let mut budget = Self {
            month_start,
            points: 0,
            income_monthly: 0.0,
            pots: Vec::new(),
            transactions: Vec::new(),
        };
        budget.ensure_reserve();
        budget
    }

    /// Creates a fresh budget whose period starts on the first of the
    /// current calendar month.
    #[must_use]
    pub fn for_current_month() -> Self {
        Self::new(current_month_start())
    }

    /// Restores the one-reserve invariant after a best-effort load. Does
    /// nothing when a reserve pot already exists.
    pub fn ensure_reserve(&mut self) {
        if !self.pots.iter().any(Pot::is_reserve) {
            let id = self.next_pot_id();
            self.pots
                .push(Pot::new(id, RESERVE_POT_NAME.to_string(), PotKind::reserve()));
        }
    }

    /// Looks up a pot by id.
    #[must_use]
    pub fn pot(&self, id: i64) -> Option<&Pot> {
        self.pots.iter().find(|p| p.id == id)
    }

    pub(crate) fn pot_mut(&mut self, id: i64) -> Option<&mut Pot> {
        self.pots.iter_mut().find(|p| p.id == id)
    }

    /// Next free pot id, following the autoincrement discipline: one past
    /// the highest id ever handed out that is still present.
    pub(crate) fn next_pot_id(&self) -> i64 {
        self.pots.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Next free transaction id.
    pub(crate) fn next_transaction_id(&self) -> i64 {
        self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}
