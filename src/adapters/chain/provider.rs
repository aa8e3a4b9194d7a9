//! Wallet Provider - alloy-rs Signer + RPC Connection
//!
//! Builds the signing HTTP provider for one run from the caller's
//! private key. The key is parsed into a local signer and dropped;
//! only the derived address is ever logged.
//!
//! The provider is stored as a `DynProvider` so the concrete filler
//! stack of `ProviderBuilder` does not leak into the adapter API.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use tracing::{info, instrument};

/// Signing provider bound to a single wallet.
#[derive(Clone)]
pub struct WalletProvider {
    /// Type-erased alloy provider with nonce/gas/chain-id fillers and the wallet.
    provider: DynProvider,
    /// Address derived from the private key.
    address: Address,
}

impl WalletProvider {
    /// Parse the private key and connect to the RPC endpoint.
    ///
    /// Accepts the key with or without a `0x` prefix. Nothing is sent to
    /// the node here; the chain id filler queries it lazily on first send.
    #[instrument(skip_all, fields(rpc_url = %rpc_url))]
    pub fn connect(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .context("Invalid private key")?;
        let address = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect_http(rpc_url.trim().parse().context("Invalid RPC URL")?)
            .erased();

        info!(wallet = %address, "Wallet provider ready");

        Ok(Self { provider, address })
    }

    /// Shared handle to the alloy provider.
    pub fn inner(&self) -> &DynProvider {
        &self.provider
    }

    /// Wallet address used for every transaction of this run.
    pub const fn address(&self) -> Address {
        self.address
    }
}

impl std::fmt::Debug for WalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletProvider")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first default account.
    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_connect_derives_address_without_network() {
        let wallet = WalletProvider::connect("http://127.0.0.1:1", ANVIL_KEY).unwrap();
        assert_eq!(
            wallet.address(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_connect_rejects_bad_key() {
        let err = WalletProvider::connect("http://127.0.0.1:1", "not-a-key").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid private key"));
    }

    #[test]
    fn test_connect_rejects_bad_url() {
        let err = WalletProvider::connect("not a url", ANVIL_KEY).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid RPC URL"));
    }

    #[test]
    fn test_debug_hides_provider_internals() {
        let wallet = WalletProvider::connect("http://127.0.0.1:1", ANVIL_KEY).unwrap();
        let debug = format!("{wallet:?}");
        assert!(debug.contains("address"));
        assert!(!debug.contains("ac0974bec"));
    }
}
