/// Seed pot configuration loading from config.toml
pub mod pots;

/// Data directory resolution for the budget document store
pub mod storage;
