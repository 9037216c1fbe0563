//! Seed pot configuration loading from config.toml
//!
//! This module provides functionality to load initial pot definitions from a
//! TOML configuration file. The pots defined in config.toml are used to seed
//! a fresh budget on first run; a budget that already has non-reserve pots
//! is left alone. The reserve pot is never part of the seed - it is created
//! automatically with the budget itself.

use crate::{
    core::pot::create_pot,
    entities::{Budget, PotKind},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of pot definitions to seed
    #[serde(default)]
    pub pots: Vec<PotConfig>,
}

/// Configuration for a single seed pot, tagged by kind
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PotConfig {
    /// A spending envelope seed
    Spending {
        /// Name of the pot
        name: String,
        /// Monthly spending limit
        monthly_limit: f64,
    },
    /// A savings goal seed
    Savings {
        /// Name of the pot
        name: String,
        /// Savings goal amount
        goal: f64,
        /// Planned monthly contribution
        #[serde(default)]
        monthly_contrib: f64,
    },
    /// An investment plan seed
    Investment {
        /// Name of the pot
        name: String,
        /// Planned monthly contribution
        #[serde(default)]
        monthly_contrib: f64,
    },
}

impl PotConfig {
    fn into_parts(self) -> (String, PotKind) {
        match self {
            Self::Spending {
                name,
                monthly_limit,
            } => (name, PotKind::spending(monthly_limit)),
            Self::Savings {
                name,
                goal,
                monthly_contrib,
            } => (name, PotKind::savings(goal, monthly_contrib)),
            Self::Investment {
                name,
                monthly_contrib,
            } => (name, PotKind::investment(monthly_contrib)),
        }
    }
}

/// Loads the seed pot configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed pot configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the configured pots into a fresh budget.
///
/// A budget that already holds any non-reserve pot is considered seeded and
/// left untouched. Returns the number of pots created.
pub fn seed_initial_pots(budget: &mut Budget, config: Config) -> Result<usize> {
    if budget.pots.iter().any(|p| !p.is_reserve()) {
        return Ok(0);
    }

    let mut created = 0;
    for pot_config in config.pots {
        let (name, kind) = pot_config.into_parts();
        let pot = create_pot(budget, name, kind)?;
        info!(pot = %pot.name, kind = pot.kind.label(), "seeded pot");
        created += 1;
    }
    Ok(created)
}
