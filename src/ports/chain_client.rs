//! Chain Client Port - On-chain Interaction Interface
//!
//! Everything the runner needs from the node and the wallet: the signer
//! address, ERC-20 allowance reads, the current gas price, signed
//! submission of a contract call, and the wait for its receipt.
//! Implemented over alloy-rs in `adapters::chain`, faked in tests.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::domain::tx::{ContractCall, TxReceipt};

/// Trait for the wallet-bound chain connection used by one run.
///
/// Implementors sign with the run's private key. The key itself never
/// crosses this boundary.
#[async_trait]
pub trait VaultChain: Send + Sync + 'static {
  /// Address of the signing wallet.
  fn wallet_address(&self) -> Address;

  /// `IERC20(token).allowance(owner, spender)`.
  async fn allowance(
    &self,
    token: Address,
    owner: Address,
    spender: Address,
  ) -> anyhow::Result<U256>;

  /// Current network gas price in wei (`eth_gasPrice`).
  async fn gas_price(&self) -> anyhow::Result<u128>;

  /// Sign and broadcast `call` with a legacy gas price.
  ///
  /// Returns as soon as the node accepts the transaction.
  async fn submit(&self, call: &ContractCall, gas_price: u128) -> anyhow::Result<TxHash>;

  /// Wait until the transaction is included and return its receipt.
  ///
  /// May never resolve; callers bound it with a timeout.
  async fn wait_for_receipt(&self, tx_hash: TxHash) -> anyhow::Result<TxReceipt>;
}
