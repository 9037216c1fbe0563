//! Binary entry point: initializes logging, opens the budget store, seeds a
//! fresh budget from config.toml when one is present, and logs a status
//! summary. All interaction with the ledger goes through the library API.

use dotenvy::dotenv;
use garden_budget::config;
use garden_budget::core::report;
use garden_budget::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Open the store and load the budget, recovering from corruption
    let store = config::storage::open_store();
    let mut budget = store.load_or_default();
    info!(path = %store.path().display(), "Budget store opened.");

    // 4. Seed initial pots from config.toml, if one is present
    match config::pots::load_default_config() {
        Ok(seed_config) => {
            let created = config::pots::seed_initial_pots(&mut budget, seed_config)
                .inspect_err(|e| error!("Failed to seed initial pots: {}", e))?;
            if created > 0 {
                info!("Seeded {} initial pots from config.toml.", created);
            }
        }
        Err(e) => info!("No seed configuration applied: {}", e),
    }

    // 5. Persist whatever state we ended up with
    store
        .save(&budget)
        .inspect_err(|e| error!("Failed to save budget document: {}", e))?;

    // 6. Log the current status summary
    info!("{}", report::format_status_summary(&budget));

    Ok(())
}
