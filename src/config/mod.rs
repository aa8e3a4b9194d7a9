//! Configuration Module - TOML-based Runner Configuration
//!
//! Two layers:
//! - `AppConfig`: the raw, serde-deserialized file. Every section has a
//!   default, so an empty file (or no file) means the Base Sepolia
//!   deployment the runner was written for.
//! - `VaultConfig`: the validated, typed value handed to the usecases.
//!   Immutable for the lifetime of a run; passed explicitly, never global.
//!
//! The private key and token-type selector are NOT part of the config.
//! They are supplied per run by the caller.

pub mod loader;

use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use serde::Deserialize;

use crate::domain::gas::{DEFAULT_BUMP_PERCENT, GasBump};
use crate::domain::token::TokenDescriptor;

/// Top-level file configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Runner identity and logging.
  pub bot: BotConfig,
  /// RPC endpoint, explorer, and contract addresses.
  pub chain: ChainConfig,
  /// Fixed call amounts, as decimal ether strings.
  pub amounts: AmountsConfig,
  /// Transaction submission parameters.
  pub tx: TxConfig,
  /// Tokens the swap contract must be approved for, in approval order.
  pub tokens: Vec<TokenConfig>,
}

/// Runner identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
  /// Human-readable name, used in the startup log line.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  pub log_level: String,
}

/// Chain endpoints and contract addresses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
  /// JSON-RPC endpoint (http/https).
  pub rpc_url: String,
  /// Explorer transaction URL prefix; the tx hash is appended.
  pub explorer_tx_url: String,
  /// Vault contract exposing `create` and `redeem`.
  pub vault_contract: String,
  /// Swap contract that receives the ERC-20 approvals.
  pub swap_contract: String,
}

/// Call amounts in ether units (18 decimals).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AmountsConfig {
  /// `approve` amount granted to the swap contract.
  pub approve: String,
  /// `depositAmount` argument; also the allowance threshold.
  pub deposit: String,
  /// `minAmount` argument.
  pub min_amount: String,
}

/// Submission parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TxConfig {
  /// How long to wait for a receipt before giving up (milliseconds).
  pub confirm_timeout_ms: u64,
  /// Gas price premium, in percent of the quoted price.
  pub gas_bump_percent: u32,
}

/// A single token entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
  /// ERC-20 contract address.
  pub address: String,
  /// Display name.
  pub name: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      bot: BotConfig::default(),
      chain: ChainConfig::default(),
      amounts: AmountsConfig::default(),
      tx: TxConfig::default(),
      tokens: default_tokens(),
    }
  }
}

impl Default for BotConfig {
  fn default() -> Self {
    Self {
      name: "vault-tx-runner".to_string(),
      log_level: "info".to_string(),
    }
  }
}

impl Default for ChainConfig {
  fn default() -> Self {
    Self {
      rpc_url: "https://base-sepolia-rpc.publicnode.com".to_string(),
      explorer_tx_url: "https://sepolia.basescan.org/tx/".to_string(),
      vault_contract: "0xF39635F2adF40608255779ff742Afe13dE31f577".to_string(),
      swap_contract: "0x809daBC75201F92AC40973f22db37995676BaA04".to_string(),
    }
  }
}

impl Default for AmountsConfig {
  fn default() -> Self {
    Self {
      approve: "10000".to_string(),
      deposit: "0.01".to_string(),
      min_amount: "0.00001".to_string(),
    }
  }
}

impl Default for TxConfig {
  fn default() -> Self {
    Self {
      confirm_timeout_ms: 60_000,
      gas_bump_percent: DEFAULT_BUMP_PERCENT,
    }
  }
}

fn default_tokens() -> Vec<TokenConfig> {
  let token = |address: &str, name: &str| TokenConfig {
    address: address.to_string(),
    name: name.to_string(),
  };

  vec![
    token("0x13e5fb0b6534bb22cbc59fae339dbbe0dc906871", "wstETH"),
    token("0x5Bd36745f6199CF32d2465Ef1F8D6c51dCA9BdEE", "bondETH"),
    token("0x98f665D98a046fB81147879eCBE9A6fF68BC276C", "levETH"),
  ]
}

/// Validated runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
  pub rpc_url: String,
  pub explorer_tx_url: String,
  pub vault_contract: Address,
  pub swap_contract: Address,
  /// Amount granted by each `approve`.
  pub approve_amount: U256,
  /// `depositAmount`; an allowance strictly above it skips the approval.
  pub deposit_amount: U256,
  pub min_amount: U256,
  pub tokens: Vec<TokenDescriptor>,
  pub confirm_timeout: Duration,
  pub gas_bump: GasBump,
}

impl VaultConfig {
  /// The built-in Base Sepolia deployment.
  pub fn base_sepolia() -> anyhow::Result<Self> {
    loader::build_vault_config(&AppConfig::default())
  }

  /// Explorer link for a transaction: `{explorer_tx_url}{tx_hash}`.
  pub fn explorer_link(&self, tx_hash: &TxHash) -> String {
    format!("{}{}", self.explorer_tx_url, tx_hash)
  }
}
