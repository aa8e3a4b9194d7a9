//! Domain layer - transaction models and pure helpers.
//!
//! Nothing in here talks to the network. Types describe what the runner
//! submits and what came back, so usecases can be tested against fakes.

pub mod gas;
pub mod token;
pub mod tx;

pub use gas::GasBump;
pub use token::{TokenDescriptor, TokenType};
pub use tx::{
    ContractCall, RunReport, StepKind, StepReport, StepStatus, TxError, TxOutcome, TxReceipt,
};
