//! Use Cases Layer - Application Workflows
//!
//! Orchestrates domain logic with the `VaultChain` port to implement
//! the runner's steps. Each step is a self-contained operation that
//! reports its own outcome instead of failing the run.
//!
//! Use cases:
//! - `TxSubmitter`: gas bump + submit + confirm-or-timeout race
//! - `approvals`: ERC-20 approvals for the swap contract
//! - `vault_ops`: vault `create` (deposit) and `redeem`
//! - `VaultRunner`: the approve → deposit → redeem sequence

pub mod approvals;
pub mod runner;
pub mod tx_submitter;
pub mod vault_ops;

pub use runner::{VaultRunner, run_with_private_key};
pub use tx_submitter::TxSubmitter;
