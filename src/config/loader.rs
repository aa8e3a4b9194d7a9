//! Configuration Loader - File Loading and Validation
//!
//! Handles loading an optional TOML file, validating all parameters,
//! and turning the raw strings into typed addresses and wei amounts.

use std::path::Path;
use std::time::Duration;

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};

use super::{AppConfig, VaultConfig};
use crate::domain::gas::GasBump;
use crate::domain::token::TokenDescriptor;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse config TOML")?;

  validate_config(&config)?;
  Ok(config)
}

/// Resolve the raw configuration: a file when a path is given,
/// the built-in Base Sepolia deployment otherwise.
pub fn load_or_default(path: Option<&str>) -> Result<AppConfig> {
  path.map_or_else(|| Ok(AppConfig::default()), load_config)
}

/// Convert a raw config into the typed value the usecases consume.
pub fn build_vault_config(config: &AppConfig) -> Result<VaultConfig> {
  validate_config(config)?;

  let tokens = config
    .tokens
    .iter()
    .map(|t| {
      Ok(TokenDescriptor::new(
        parse_address(&format!("token {}", t.name), &t.address)?,
        t.name.clone(),
      ))
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(VaultConfig {
    rpc_url: config.chain.rpc_url.clone(),
    explorer_tx_url: config.chain.explorer_tx_url.clone(),
    vault_contract: parse_address("vault_contract", &config.chain.vault_contract)?,
    swap_contract: parse_address("swap_contract", &config.chain.swap_contract)?,
    approve_amount: parse_amount("approve", &config.amounts.approve)?,
    deposit_amount: parse_amount("deposit", &config.amounts.deposit)?,
    min_amount: parse_amount("min_amount", &config.amounts.min_amount)?,
    tokens,
    confirm_timeout: Duration::from_millis(config.tx.confirm_timeout_ms),
    gas_bump: GasBump::new(config.tx.gas_bump_percent),
  })
}

fn parse_address(name: &str, value: &str) -> Result<Address> {
  value
    .trim()
    .parse()
    .with_context(|| format!("Invalid address for {name}: {value}"))
}

fn parse_amount(name: &str, value: &str) -> Result<U256> {
  let wei = parse_ether(value.trim())
    .with_context(|| format!("Invalid ether amount for {name}: {value}"))?;
  anyhow::ensure!(wei > U256::ZERO, "Amount {name} must be positive, got {value}");
  Ok(wei)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - http(s) RPC endpoint and non-empty explorer prefix
/// - non-empty token list with unique names
/// - non-zero confirmation timeout
/// - gas premium of at least 100%
fn validate_config(config: &AppConfig) -> Result<()> {
  let rpc = config.chain.rpc_url.trim();
  anyhow::ensure!(
    rpc.starts_with("http://") || rpc.starts_with("https://"),
    "rpc_url must be an http(s) URL, got {:?}",
    config.chain.rpc_url
  );
  anyhow::ensure!(
    !config.chain.explorer_tx_url.is_empty(),
    "explorer_tx_url must not be empty"
  );

  anyhow::ensure!(
    !config.tokens.is_empty(),
    "At least one token must be configured"
  );
  for (i, token) in config.tokens.iter().enumerate() {
    anyhow::ensure!(!token.name.is_empty(), "Token {i} has an empty name");
    anyhow::ensure!(
      config.tokens[..i].iter().all(|t| t.name != token.name),
      "Token name {} is configured twice",
      token.name
    );
  }

  anyhow::ensure!(
    config.tx.confirm_timeout_ms > 0,
    "confirm_timeout_ms must be positive"
  );
  anyhow::ensure!(
    config.tx.gas_bump_percent >= 100,
    "gas_bump_percent must be at least 100, got {}",
    config.tx.gas_bump_percent
  );

  Ok(())
}
