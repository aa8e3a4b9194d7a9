//! Vault Operations Use Case - `create` (deposit) and `redeem`
//!
//! Both calls share the argument triple
//! `(tokenType, depositAmount, minAmount)` and the same submit policy.
//! Neither ever returns an error: failures are logged and recorded so the
//! runner can move on.

use tracing::{error, info};

use crate::config::VaultConfig;
use crate::domain::token::TokenType;
use crate::domain::tx::{ContractCall, StepKind, StepReport, StepStatus};
use crate::ports::chain_client::VaultChain;

use super::tx_submitter::TxSubmitter;

/// Submit `create(tokenType, depositAmount, minAmount)` on the vault.
pub async fn deposit<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
  token_type: TokenType,
) -> StepReport {
  let call = ContractCall::Create {
    vault: config.vault_contract,
    token_type,
    deposit_amount: config.deposit_amount,
    min_amount: config.min_amount,
  };

  vault_call(chain, config, StepKind::Deposit, &call).await
}

/// Submit `redeem(tokenType, depositAmount, minAmount)` on the vault.
pub async fn redeem<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
  token_type: TokenType,
) -> StepReport {
  let call = ContractCall::Redeem {
    vault: config.vault_contract,
    token_type,
    deposit_amount: config.deposit_amount,
    min_amount: config.min_amount,
  };

  vault_call(chain, config, StepKind::Redeem, &call).await
}

async fn vault_call<C: VaultChain + ?Sized>(
  chain: &C,
  config: &VaultConfig,
  kind: StepKind,
  call: &ContractCall,
) -> StepReport {
  let label = format!("{} transaction", kind.title());

  let status = match TxSubmitter::new(chain, config)
    .submit_and_confirm(&label, call)
    .await
  {
    Ok(outcome) => {
      info!(
        step = %kind,
        tx_hash = %outcome.tx_hash,
        block = ?outcome.block_number,
        gas_price = outcome.gas_price,
        gas_price = outcome.gas_price,
        "{label} confirmed {}",
        config.explorer_link(&outcome.tx_hash)
      );
      StepStatus::Confirmed(outcome)
    }
    Err(e) => {
      error!(step = %kind, error = %e, "Error in {kind}: {e}");
      StepStatus::Failed(e)
    }
  };

  StepReport::new(kind, kind.to_string(), status)
}
