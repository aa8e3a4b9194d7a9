//! Vault Transaction Runner — Entry Point
//!
//! One-shot run of the approve → deposit → redeem sequence for a single
//! wallet, then exit.
//!
//! Wiring sequence:
//! 1. Load config (file from `VAULT_CONFIG`, or Base Sepolia defaults)
//! 2. Init tracing (JSON structured logging)
//! 3. Read `PRIVATE_KEY` and `TOKEN_TYPE` from env
//! 4. Build the signing provider and run every step
//! 5. Log the run summary; exit status is 0 regardless of step outcomes

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use vault_tx_runner::config::loader;
use vault_tx_runner::domain::token::TokenType;
use vault_tx_runner::usecases::run_with_private_key;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::var("VAULT_CONFIG").ok();
    let app = loader::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app.bot.log_level)),
        )
        .json()
        .init();

    let config = loader::build_vault_config(&app).context("Invalid configuration")?;

    info!(
        name = %app.bot.name,
        version = env!("CARGO_PKG_VERSION"),
        config_file = config_path.as_deref().unwrap_or("<built-in>"),
        rpc_url = %config.rpc_url,
        vault = %config.vault_contract,
        swap = %config.swap_contract,
        tokens = config.tokens.len(),
        "Starting vault transaction runner"
    );

    // ── 3. Per-run inputs from env ──────────────────────────
    let private_key = std::env::var("PRIVATE_KEY").context("PRIVATE_KEY not set")?;
    let token_type: TokenType = std::env::var("TOKEN_TYPE")
        .context("TOKEN_TYPE not set")?
        .parse()
        .context("Invalid TOKEN_TYPE")?;

    // ── 4. Run approve → deposit → redeem ──────────────────
    let report = run_with_private_key(config, &private_key, token_type).await?;
    drop(private_key);

    // ── 5. Summary ──────────────────────────────────────────
    if report.all_succeeded() {
        info!(summary = %report.to_json(), "Run complete");
    } else {
        warn!(
            failed = report.failed(),
            summary = %report.to_json(),
            "Run complete with failed steps"
        );
    }

    Ok(())
}
