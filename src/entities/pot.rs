//! Pot entity - Represents a named budget bucket.
//!
//! Each pot has an id, name, growth state (stage and plant points), and a
//! kind-specific payload: spending pots track a monthly limit and what has
//! been spent against it, savings pots track a goal with milestone progress,
//! investment pots track contributions, and the single reserve pot backstops
//! overspending at month close.

use serde::{Deserialize, Serialize};

/// Growth stage of a pot's plant, advanced one step at a time by spending
/// points. `Majestic` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stage {
    /// Stage 0 - every new pot starts here
    #[default]
    Seedling,
    /// Stage 1
    Sprout,
    /// Stage 2
    Bush,
    /// Stage 3
    Tree,
    /// Stage 4 - terminal, no further upgrades
    Majestic,
}

impl Stage {
    /// The stage reached by one upgrade, or `None` at `Majestic`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Seedling => Some(Self::Sprout),
            Self::Sprout => Some(Self::Bush),
            Self::Bush => Some(Self::Tree),
            Self::Tree => Some(Self::Majestic),
            Self::Majestic => None,
        }
    }

    /// Human-readable stage name for rendering and logs.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Seedling => "Seedling",
            Self::Sprout => "Sprout",
            Self::Bush => "Bush",
            Self::Tree => "Tree",
            Self::Majestic => "Majestic",
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Seedling => 0,
            Stage::Sprout => 1,
            Stage::Bush => 2,
            Stage::Tree => 3,
            Stage::Majestic => 4,
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Seedling),
            1 => Ok(Self::Sprout),
            2 => Ok(Self::Bush),
            3 => Ok(Self::Tree),
            4 => Ok(Self::Majestic),
            other => Err(format!("unknown stage {other}")),
        }
    }
}

/// Kind-specific payload of a pot. Serialized inline into the pot record,
/// tagged by the `kind` field, so each record carries only the fields its
/// kind actually uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PotKind {
    /// A spending envelope with a monthly limit
    #[serde(rename_all = "camelCase")]
    Spending {
        /// Budgeted amount per month (>= 0)
        #[serde(default)]
        monthly_limit: f64,
        /// Amount spent in the current accounting period; resets at month close
        #[serde(default)]
        spent_this_month: f64,
    },
    /// A savings goal with milestone rewards
    #[serde(rename_all = "camelCase")]
    Savings {
        /// Target amount (>= 0); milestones are fractions of this
        #[serde(default)]
        goal: f64,
        /// Total saved so far; only grows via transactions
        #[serde(default)]
        saved_total: f64,
        /// Planned contribution per month (informational)
        #[serde(default)]
        monthly_contrib: f64,
        /// Highest milestone fraction already rewarded (0, 0.25, 0.5, 0.75, 1.0);
        /// never decreases
        #[serde(default)]
        last_milestone_reached: f64,
    },
    /// An investment plan - contributions accumulate, no milestones
    #[serde(rename_all = "camelCase")]
    Investment {
        /// Total invested so far
        #[serde(default)]
        saved_total: f64,
        /// Planned contribution per month (informational)
        #[serde(default)]
        monthly_contrib: f64,
    },
    /// The single overspend-backstop fund; drawn down at month close
    #[serde(rename_all = "camelCase")]
    Reserve {
        /// Current reserve balance; never goes negative
        #[serde(default)]
        saved_total: f64,
    },
}

impl PotKind {
    /// New spending payload with zeroed monthly counter.
    #[must_use]
    pub const fn spending(monthly_limit: f64) -> Self {
        Self::Spending {
            monthly_limit,
            spent_this_month: 0.0,
        }
    }

    /// New savings payload with zeroed balance and milestone mark.
    #[must_use]
    pub const fn savings(goal: f64, monthly_contrib: f64) -> Self {
        Self::Savings {
            goal,
            saved_total: 0.0,
            monthly_contrib,
            last_milestone_reached: 0.0,
        }
    }

    /// New investment payload with zeroed balance.
    #[must_use]
    pub const fn investment(monthly_contrib: f64) -> Self {
        Self::Investment {
            saved_total: 0.0,
            monthly_contrib,
        }
    }

    /// New empty reserve payload.
    #[must_use]
    pub const fn reserve() -> Self {
        Self::Reserve { saved_total: 0.0 }
    }

    /// Lowercase kind label, matching the serialized `kind` tag.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Spending { .. } => "spending",
            Self::Savings { .. } => "savings",
            Self::Investment { .. } => "investment",
            Self::Reserve { .. } => "reserve",
        }
    }
}

/// A budget pot: one bucket of the user's money plan plus its plant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pot {
    /// Unique identifier for the pot
    pub id: i64,
    /// Human-readable name of the pot (e.g., "Groceries", "Emergency Fund")
    pub name: String,
    /// Current growth stage of the pot's plant
    #[serde(default)]
    pub stage: Stage,
    /// Cumulative reward score driving growth; floored at 0. The reserve pot
    /// carries this field but never accrues points.
    #[serde(default)]
    pub plant_points: i64,
    /// Kind-specific fields, flattened into the pot record
    #[serde(flatten)]
    pub kind: PotKind,
}

impl Pot {
    /// Builds a pot at the seedling stage with zero plant points.
    #[must_use]
    pub const fn new(id: i64, name: String, kind: PotKind) -> Self {
        Self {
            id,
            name,
            stage: Stage::Seedling,
            plant_points: 0,
            kind,
        }
    }

    /// Whether this pot is the reserve fund.
    #[must_use]
    pub const fn is_reserve(&self) -> bool {
        matches!(self.kind, PotKind::Reserve { .. })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_stage_advances_one_step_and_terminates() {
        assert_eq!(Stage::Seedling.next(), Some(Stage::Sprout));
        assert_eq!(Stage::Sprout.next(), Some(Stage::Bush));
        assert_eq!(Stage::Bush.next(), Some(Stage::Tree));
        assert_eq!(Stage::Tree.next(), Some(Stage::Majestic));
        assert_eq!(Stage::Majestic.next(), None);
    }

    #[test]
    fn test_stage_round_trips_through_u8() {
        for raw in 0u8..=4 {
            let stage = Stage::try_from(raw).unwrap();
            assert_eq!(u8::from(stage), raw);
        }
        assert!(Stage::try_from(5).is_err());
    }

    #[test]
    fn test_pot_serializes_with_kind_tag_and_camel_case_fields() {
        let pot = Pot::new(3, "Food".to_string(), PotKind::spending(250.0));
        let json = serde_json::to_value(&pot).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["kind"], "spending");
        assert_eq!(json["monthlyLimit"], 250.0);
        assert_eq!(json["spentThisMonth"], 0.0);
        assert_eq!(json["stage"], 0);
        assert_eq!(json["plantPoints"], 0);
        // Savings-only fields must not leak into a spending record
        assert!(json.get("goal").is_none());
        assert!(json.get("savedTotal").is_none());
    }

    #[test]
    fn test_pot_deserializes_with_missing_optional_fields() {
        // A minimal record, as an older store generation might have written it
        let json = r#"{"id":1,"name":"Emergency","kind":"savings","goal":1000.0}"#;
        let pot: Pot = serde_json::from_str(json).unwrap();

        assert_eq!(pot.stage, Stage::Seedling);
        assert_eq!(pot.plant_points, 0);
        match pot.kind {
            PotKind::Savings {
                goal,
                saved_total,
                monthly_contrib,
                last_milestone_reached,
            } => {
                assert_eq!(goal, 1000.0);
                assert_eq!(saved_total, 0.0);
                assert_eq!(monthly_contrib, 0.0);
                assert_eq!(last_milestone_reached, 0.0);
            }
            other => panic!("expected savings kind, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_labels_match_serialized_tags() {
        assert_eq!(PotKind::spending(0.0).label(), "spending");
        assert_eq!(PotKind::savings(0.0, 0.0).label(), "savings");
        assert_eq!(PotKind::investment(0.0).label(), "investment");
        assert_eq!(PotKind::reserve().label(), "reserve");
    }
}
