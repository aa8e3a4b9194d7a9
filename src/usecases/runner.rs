//! Runner Use Case - Approve → Deposit → Redeem
//!
//! Strictly linear: Init → ApproveEach(token₁…tokenₙ) → Deposit → Redeem → Done.
//! No branching, no retries, no rollback. Every stage catches and logs its
//! own failure and the runner always advances, so a redeem is attempted
//! even when the deposit failed. The outcome of each step is returned in a
//! [`RunReport`] for callers that want to act on it.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, instrument};

use crate::adapters::chain::AlloyVaultChain;
use crate::config::VaultConfig;
use crate::domain::token::TokenType;
use crate::domain::tx::RunReport;
use crate::ports::chain_client::VaultChain;

use super::{approvals, vault_ops};

/// Runs the fixed transaction sequence for one wallet.
pub struct VaultRunner<C: VaultChain + ?Sized> {
  chain: Arc<C>,
  config: VaultConfig,
}

impl<C: VaultChain + ?Sized> VaultRunner<C> {
  /// Create a runner over an already wallet-bound chain client.
  pub const fn new(chain: Arc<C>, config: VaultConfig) -> Self {
    Self { chain, config }
  }

  /// Execute every step in order and report what happened.
  #[instrument(skip(self), fields(wallet = %self.chain.wallet_address()))]
  pub async fn run(&self, token_type: TokenType) -> RunReport {
    let chain = self.chain.as_ref();
    let wallet = chain.wallet_address();
    let started_at = Utc::now();

    let mut steps = approvals::approve_all_tokens(chain, &self.config).await;

    info!(%wallet, %token_type, "Address {wallet} Executing deposit...");
    steps.push(vault_ops::deposit(chain, &self.config, token_type).await);

    info!(%wallet, %token_type, "Address {wallet} Executing redeem...");
    steps.push(vault_ops::redeem(chain, &self.config, token_type).await);

    RunReport {
      wallet,
      token_type,
      steps,
      started_at,
      finished_at: Utc::now(),
    }
  }
}

/// Entry point: build the wallet from `private_key` and run all steps.
///
/// The key is only used to build the signer for this run; it is never
/// logged or stored. Step failures are reported in the returned
/// [`RunReport`], not as an error.
///
/// # Errors
/// Only when nothing can run at all: a malformed key or RPC URL.
pub async fn run_with_private_key(
  config: VaultConfig,
  private_key: &str,
  token_type: TokenType,
) -> Result<RunReport> {
  let chain = AlloyVaultChain::connect(&config.rpc_url, private_key)?;
  let runner = VaultRunner::new(Arc::new(chain), config);
  Ok(runner.run(token_type).await)
}
