//! Approval Use Case - ERC-20 Allowances for the Swap Contract
//!
//! For every configured token, make sure the swap contract may spend
//! at least the deposit amount on the wallet's behalf:
//! - allowance strictly above `deposit_amount` → nothing to do
//! - otherwise → `approve(swap, approve_amount)` at the bumped gas price
//!
//! Tokens are processed one at a time. A failing token is logged and
//! recorded; the remaining tokens are still attempted.

use tracing::{error, info};

use crate::config::VaultConfig;
use crate::domain::token::TokenDescriptor;
use crate::domain::tx::{ContractCall, StepKind, StepReport, StepStatus, TxError};
use crate::ports::chain_client::VaultChain;

use super::tx_submitter::TxSubmitter;

/// Approve every configured token, sequentially, in config order.
pub async fn approve_all_tokens<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
) -> Vec<StepReport> {
  let mut reports = Vec::with_capacity(config.tokens.len());

  for token in &config.tokens {
    reports.push(approve_token_if_needed(chain, config, token).await);
  }

  reports
}

/// Check one token's allowance and approve it if needed.
///
/// Never fails: errors are logged and returned as [`StepStatus::Failed`].
pub async fn approve_token_if_needed<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
  token: &TokenDescriptor,
) -> StepReport {
  let status = match try_approve(chain, config, token).await {
    Ok(status) => status,
    Err(e) => {
      error!(token = %token.name, error = %e, "Error approving {}: {e}", token.name);
      StepStatus::Failed(e)
    }
  };

  StepReport::new(StepKind::Approve, token.name.clone(), status)
}

async fn try_approve<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
  token: &TokenDescriptor,
) -> Result<StepStatus, TxError> {
  let allowance = chain
    .allowance(token.address, chain.wallet_address(), config.swap_contract)
    .await
    .map_err(|e| TxError::rpc(&e))?;

  if allowance > config.deposit_amount {
    info!(
      token = %token.name,
      %allowance,
      "Allowance for {} sufficient, approval skipped",
      token.name
    );
    return Ok(StepStatus::Skipped { allowance });
  }

  let call = ContractCall::Approve {
    token: token.address,
    spender: config.swap_contract,
    amount: config.approve_amount,
  };

  let label = format!("Approval transaction for {}", token.name);
  let outcome = TxSubmitter::new(chain, config)
    .submit_and_confirm(&label, &call)
    .await?;

  info!(
    token = %token.name,
    tx_hash = %outcome.tx_hash,
    block = ?outcome.block_number,
    gas_price = outcome.gas_price,
    "{label} confirmed {}",
    config.explorer_link(&outcome.tx_hash)
  );

  Ok(StepStatus::Confirmed(outcome))
}
