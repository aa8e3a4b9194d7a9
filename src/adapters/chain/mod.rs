//! Chain Adapters - EVM Interaction Layer
//!
//! Provides on-chain access via alloy-rs for:
//! - signing HTTP provider construction from a private key
//! - ERC-20 allowance / approve and vault create / redeem calls
//! - gas price quotes and receipt polling

pub mod contracts;
pub mod provider;

pub use contracts::AlloyVaultChain;
pub use provider::WalletProvider;
