//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `VaultChain`: wallet-bound RPC access (allowances, gas, send, receipts)

pub mod chain_client;

pub use chain_client::VaultChain;
