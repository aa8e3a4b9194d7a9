//! Transaction and step result models.
//!
//! A run is a fixed sequence of steps. Each step either skips (the
//! allowance is already sufficient), confirms on-chain, or fails with a
//! [`TxError`]. Failures are recorded, never propagated: the runner always
//! advances to the next step.

use std::fmt;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use super::token::TokenType;

/// A state-changing contract call the runner submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// `IERC20(token).approve(spender, amount)`
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    /// `IVault(vault).create(tokenType, depositAmount, minAmount)`
    Create {
        vault: Address,
        token_type: TokenType,
        deposit_amount: U256,
        min_amount: U256,
    },
    /// `IVault(vault).redeem(tokenType, depositAmount, minAmount)`
    Redeem {
        vault: Address,
        token_type: TokenType,
        deposit_amount: U256,
        min_amount: U256,
    },
}

impl ContractCall {
    /// Address the transaction is sent to.
    pub const fn target(&self) -> Address {
        match self {
            Self::Approve { token, .. } => *token,
            Self::Create { vault, .. } | Self::Redeem { vault, .. } => *vault,
        }
    }

    /// Solidity function name.
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::Approve { .. } => "approve",
            Self::Create { .. } => "create",
            Self::Redeem { .. } => "redeem",
        }
    }
}

/// Receipt summary returned by the chain client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// `false` when the receipt status is 0 (reverted).
    pub success: bool,
}

/// A transaction that was mined successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// Gas price (wei) the transaction was submitted with.
    pub gas_price: u128,
}

/// Failure of a single submit-and-confirm attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxError {
    /// Node unreachable, malformed response, or a call/estimate rejected.
    #[error("rpc error: {0}")]
    Rpc(String),
    /// Mined with status 0.
    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },
    /// No receipt observed before the local deadline.
    #[error("transaction {tx_hash} timed out after {}ms", .after.as_millis())]
    Timeout { tx_hash: TxHash, after: Duration },
}

impl TxError {
    /// Wraps any error chain as an RPC failure.
    pub fn rpc(err: &anyhow::Error) -> Self {
        Self::Rpc(format!("{err:#}"))
    }

    /// Hash of the submitted transaction, if it got that far.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::Rpc(_) => None,
            Self::Reverted { tx_hash } | Self::Timeout { tx_hash, .. } => Some(*tx_hash),
        }
    }
}

/// Which stage of the run a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Approve,
    Deposit,
    Redeem,
}

impl StepKind {
    /// Capitalized name used at the start of log lines.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Approve => "Approval",
            Self::Deposit => "Deposit",
            Self::Redeem => "Redeem",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "approve",
            Self::Deposit => "deposit",
            Self::Redeem => "redeem",
        })
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Allowance already above the deposit amount; nothing sent.
    Skipped { allowance: U256 },
    Confirmed(TxOutcome),
    Failed(TxError),
}

/// One line of the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    /// Token name for approvals, the step name otherwise.
    pub label: String,
    pub status: StepStatus,
}

impl StepReport {
    pub fn new(kind: StepKind, label: impl Into<String>, status: StepStatus) -> Self {
        Self {
            kind,
            label: label.into(),
            status,
        }
    }

    /// Skipped or confirmed.
    pub const fn is_ok(&self) -> bool {
        !matches!(self.status, StepStatus::Failed(_))
    }

    /// Structured form for the final summary log line.
    pub fn to_json(&self) -> Value {
        let (status, tx_hash, gas_price, detail) = match &self.status {
            StepStatus::Skipped { allowance } => {
                ("skipped", None, None, Some(format!("allowance {allowance}")))
            }
            StepStatus::Confirmed(outcome) => (
                "confirmed",
                Some(outcome.tx_hash.to_string()),
                Some(outcome.gas_price.to_string()),
                outcome.block_number.map(|b| format!("block {b}")),
            ),
            StepStatus::Failed(err) => (
                "failed",
                err.tx_hash().map(|h| h.to_string()),
                None,
                Some(err.to_string()),
            ),
        };

        json!({
            "step": self.kind.to_string(),
            "label": self.label,
            "status": status,
            "tx_hash": tx_hash,
            "gas_price": gas_price,
            "detail": detail,
        })
    }
}

/// Ordered record of everything one run attempted.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub wallet: Address,
    pub token_type: TokenType,
    pub steps: Vec<StepReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// Number of steps that mined successfully.
    pub fn confirmed(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Confirmed(_)))
            .count()
    }

    /// Number of steps that failed.
    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_ok()).count()
    }

    /// True when no step failed.
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(StepReport::is_ok)
    }

    /// Steps of one kind, in execution order.
    pub fn steps_of(&self, kind: StepKind) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(move |s| s.kind == kind)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "wallet": self.wallet.to_string(),
            "token_type": self.token_type.value(),
            "started_at": self.started_at.to_rfc3339(),
            "finished_at": self.finished_at.to_rfc3339(),
            "confirmed": self.confirmed(),
            "failed": self.failed(),
            "steps": self.steps.iter().map(StepReport::to_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(byte: u8) -> TxHash {
        TxHash::repeat_byte(byte)
    }

    fn sample_report() -> RunReport {
        RunReport {
            wallet: Address::repeat_byte(0x11),
            token_type: TokenType(1),
            steps: vec![
                StepReport::new(
                    StepKind::Approve,
                    "wstETH",
                    StepStatus::Skipped {
                        allowance: U256::from(5u64),
                    },
                ),
                StepReport::new(
                    StepKind::Deposit,
                    "deposit",
                    StepStatus::Confirmed(TxOutcome {
                        tx_hash: hash(0xaa),
                        block_number: Some(42),
                        gas_price: 125,
                    }),
                ),
                StepReport::new(
                    StepKind::Redeem,
                    "redeem",
                    StepStatus::Failed(TxError::Timeout {
                        tx_hash: hash(0xbb),
                        after: Duration::from_secs(60),
                    }),
                ),
            ],
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_step_kind_titles() {
        assert_eq!(StepKind::Approve.title(), "Approval");
        assert_eq!(StepKind::Deposit.title(), "Deposit");
        assert_eq!(StepKind::Redeem.title(), "Redeem");
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();
        assert_eq!(report.confirmed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_succeeded());
        assert_eq!(report.steps_of(StepKind::Approve).count(), 1);
    }

    #[test]
    fn test_report_json_shape() {
        let value = sample_report().to_json();
        assert_eq!(value["token_type"], 1);
        assert_eq!(value["steps"][0]["status"], "skipped");
        assert_eq!(value["steps"][1]["status"], "confirmed");
        assert_eq!(value["steps"][1]["detail"], "block 42");
        assert_eq!(value["steps"][1]["gas_price"], "125");
        assert!(value["steps"][0]["gas_price"].is_null());
        assert_eq!(value["steps"][2]["status"], "failed");
        assert_eq!(value["steps"][2]["tx_hash"], hash(0xbb).to_string());
    }

    #[test]
    fn test_timeout_error_message() {
        let err = TxError::Timeout {
            tx_hash: hash(0x01),
            after: Duration::from_millis(60_000),
        };
        assert!(err.to_string().ends_with("timed out after 60000ms"));
        assert_eq!(err.tx_hash(), Some(hash(0x01)));
        assert_eq!(TxError::Rpc("boom".into()).tx_hash(), None);
    }

    #[test]
    fn test_call_target_and_name() {
        let call = ContractCall::Create {
            vault: Address::repeat_byte(0x22),
            token_type: TokenType(0),
            deposit_amount: U256::from(1u64),
            min_amount: U256::from(1u64),
        };
        assert_eq!(call.target(), Address::repeat_byte(0x22));
        assert_eq!(call.function_name(), "create");
    }
}
