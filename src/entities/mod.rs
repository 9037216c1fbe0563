//! Entity module - Contains the plain data models for the budget ledger.
//! These entities make up the single serialized budget record: the budget
//! state itself, its pots, and its transactions.

pub mod budget;
pub mod pot;
pub mod transaction;

// Re-export the model types for convenient access
pub use budget::{Budget, RESERVE_POT_NAME, current_month_start};
pub use pot::{Pot, PotKind, Stage};
pub use transaction::Transaction;
