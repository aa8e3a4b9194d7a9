//! Vault Contract Bindings - ERC-20 + Vault ABI via `sol!`
//!
//! Implements the `VaultChain` port on top of a [`WalletProvider`]:
//! allowance reads, gas quotes, signed submission of
//! `approve`/`create`/`redeem`, and receipt polling.
//!
//! The vault interface merges `create` and `redeem` into one binding,
//! both taking `(uint8 tokenType, uint256 depositAmount, uint256 minAmount)`.

use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::sol;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::tx::{ContractCall, TxReceipt};
use crate::ports::chain_client::VaultChain;

use super::provider::WalletProvider;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 value) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
    }

    #[sol(rpc)]
    interface IVault {
        function create(uint8 tokenType, uint256 depositAmount, uint256 minAmount) external;
        function redeem(uint8 tokenType, uint256 depositAmount, uint256 minAmount) external;
    }
}

/// `VaultChain` implementation over alloy-rs.
#[derive(Debug, Clone)]
pub struct AlloyVaultChain {
    wallet: WalletProvider,
}

impl AlloyVaultChain {
    pub const fn new(wallet: WalletProvider) -> Self {
        Self { wallet }
    }

    /// Connect a signing provider for `private_key` and wrap it.
    pub fn connect(rpc_url: &str, private_key: &str) -> Result<Self> {
        WalletProvider::connect(rpc_url, private_key).map(Self::new)
    }
}

#[async_trait]
impl VaultChain for AlloyVaultChain {
    fn wallet_address(&self) -> Address {
        self.wallet.address()
    }

    #[instrument(skip(self), level = "debug")]
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        let erc20 = IERC20::new(token, self.wallet.inner().clone());

        erc20
            .allowance(owner, spender)
            .call()
            .await
            .with_context(|| format!("allowance query failed for token {token}"))
    }

    #[instrument(skip(self), level = "debug")]
    async fn gas_price(&self) -> Result<u128> {
        let price = self
            .wallet
            .inner()
            .get_gas_price()
            .await
            .context("Failed to query gas price")?;

        debug!(gas_price_wei = price, "Gas price quoted");
        Ok(price)
    }

    #[instrument(
        skip(self, call),
        level = "debug",
        fields(function = call.function_name(), to = %call.target())
    )]
    async fn submit(&self, call: &ContractCall, gas_price: u128) -> Result<TxHash> {
        let provider = self.wallet.inner().clone();

        let pending = match call {
            ContractCall::Approve {
                token,
                spender,
                amount,
            } => IERC20::new(*token, provider)
                .approve(*spender, *amount)
                .gas_price(gas_price)
                .send()
                .await,
            ContractCall::Create {
                vault,
                token_type,
                deposit_amount,
                min_amount,
            } => IVault::new(*vault, provider)
                .create(token_type.value(), *deposit_amount, *min_amount)
                .gas_price(gas_price)
                .send()
                .await,
            ContractCall::Redeem {
                vault,
                token_type,
                deposit_amount,
                min_amount,
            } => IVault::new(*vault, provider)
                .redeem(token_type.value(), *deposit_amount, *min_amount)
                .gas_price(gas_price)
                .send()
                .await,
        }
        .with_context(|| format!("{} submission failed", call.function_name()))?;

        Ok(*pending.tx_hash())
    }

    #[instrument(skip(self), level = "debug")]
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt> {
        let root = self.wallet.inner().root().clone();

        let receipt = PendingTransactionBuilder::new(root, tx_hash)
            .get_receipt()
            .await
            .with_context(|| format!("Failed to fetch receipt for {tx_hash}"))?;

        Ok(TxReceipt {
            tx_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            success: receipt.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolCall;

    use super::*;

    #[test]
    fn test_erc20_selectors() {
        assert_eq!(IERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(IERC20::allowanceCall::SELECTOR, [0xdd, 0x62, 0xed, 0x3e]);
    }

    #[test]
    fn test_vault_signatures() {
        assert_eq!(
            IVault::createCall::SIGNATURE,
            "create(uint8,uint256,uint256)"
        );
        assert_eq!(
            IVault::redeemCall::SIGNATURE,
            "redeem(uint8,uint256,uint256)"
        );
    }

    #[test]
    fn test_create_calldata_layout() {
        let call = IVault::createCall {
            tokenType: 1,
            depositAmount: U256::from(10u64),
            minAmount: U256::from(1u64),
        };
        let data = call.abi_encode();

        // selector + three 32-byte words
        assert_eq!(data.len(), 4 + 3 * 32);
        assert_eq!(data[4 + 31], 1);
        assert_eq!(data[4 + 63], 10);
        assert_eq!(data[4 + 95], 1);
    }
}
