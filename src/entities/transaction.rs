//! Transaction entity - Represents a single logged expense or contribution.
//!
//! Each transaction has a `pot_id` foreign key, a free-text merchant label,
//! a positive amount, and an occurrence timestamp. Transactions are never
//! edited or deleted individually; deleting a pot cascades over them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged transaction against a pot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: i64,
    /// Free-text merchant or description label (may be empty)
    #[serde(default)]
    pub merchant: String,
    /// Transaction amount; always positive, applied per the pot's kind
    pub amount: f64,
    /// ID of the pot this transaction belongs to
    pub pot_id: i64,
    /// When the transaction occurred
    #[serde(rename = "occurredAtISO")]
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_transaction_serializes_iso_timestamp() {
        let tx = Transaction {
            id: 7,
            merchant: "Grocer".to_string(),
            amount: 12.5,
            pot_id: 2,
            occurred_at: "2026-08-01T09:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["potId"], 2);
        assert_eq!(json["occurredAtISO"], "2026-08-01T09:30:00Z");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }
}
