//! Transaction Submitter - Quote, Bump, Send, Race the Receipt
//!
//! The one place that turns a [`ContractCall`] into a mined transaction:
//! 1. quote the current gas price from the node (never cached)
//! 2. apply the configured premium (125% by default, truncating)
//! 3. sign and broadcast
//! 4. race the receipt against the confirmation timeout
//!
//! Whichever of receipt and timer settles first wins. On timeout the
//! receipt wait is dropped locally; the transaction itself is not
//! cancelled and may still be mined later.

use std::time::Duration;

use tracing::info;

use crate::config::VaultConfig;
use crate::domain::gas::GasBump;
use crate::domain::tx::{ContractCall, TxError, TxOutcome};
use crate::ports::chain_client::VaultChain;

/// Submits contract calls for one run with a fixed gas policy and timeout.
pub struct TxSubmitter<'a, C: VaultChain + ?Sized> {
  chain: &'a C,
  gas_bump: GasBump,
  confirm_timeout: Duration,
}

impl<'a, C: VaultChain + ?Sized> TxSubmitter<'a, C> {
  /// Create a submitter using the config's gas premium and timeout.
  pub const fn new(chain: &'a C, config: &VaultConfig) -> Self {
    Self::with_policy(chain, config.gas_bump, config.confirm_timeout)
  }

  /// Create a submitter with an explicit gas premium and timeout.
  pub const fn with_policy(chain: &'a C, gas_bump: GasBump, confirm_timeout: Duration) -> Self {
    Self {
      chain,
      gas_bump,
      confirm_timeout,
    }
  }

  /// Submit `call` and wait for it to be mined.
  ///
  /// `label` prefixes the submission log line, e.g.
  /// `"Approval transaction for wstETH"` → `"... sent 0xabc…"`.
  ///
  /// # Errors
  /// - [`TxError::Rpc`] if the gas quote, submission, or receipt fetch fails
  /// - [`TxError::Reverted`] if the receipt reports status 0
  /// - [`TxError::Timeout`] if no receipt arrives within the timeout
  pub async fn submit_and_confirm(
    &self,
    label: &str,
    call: &ContractCall,
  ) -> Result<TxOutcome, TxError> {
    let quote = self
      .chain
      .gas_price()
      .await
      .map_err(|e| TxError::rpc(&e))?;
    let gas_price = self.gas_bump.apply(quote);

    let tx_hash = self
      .chain
      .submit(call, gas_price)
      .await
      .map_err(|e| TxError::rpc(&e))?;

    info!(
      %tx_hash,
      function = call.function_name(),
      quoted_gas_price = quote,
      gas_price,
      "{label} sent {tx_hash}"
    );

    let receipt = tokio::time::timeout(self.confirm_timeout, self.chain.wait_for_receipt(tx_hash))
      .await
      .map_err(|_| TxError::Timeout {
        tx_hash,
        after: self.confirm_timeout,
      })?
      .map_err(|e| TxError::rpc(&e))?;

    if !receipt.success {
      return Err(TxError::Reverted { tx_hash });
    }

    Ok(TxOutcome {
      tx_hash,
      block_number: receipt.block_number,
      gas_price,
    })
  }
}
