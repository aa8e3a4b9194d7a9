//! Gas price bumping for submitted transactions.
//!
//! Every send quotes the node's current gas price and offers a fixed
//! premium on top of it so the transaction is picked up quickly on a
//! busy test network. Integer math only: the result is truncated,
//! never rounded up.

use alloy::primitives::U256;

/// Default premium: 125% of the quoted gas price.
pub const DEFAULT_BUMP_PERCENT: u32 = 125;

/// Scales a quoted gas price by a percentage with truncating integer math.
///
/// `bumped = quote * percent / 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasBump {
    percent: u32,
}

impl GasBump {
    /// Creates a bump with the given percentage (100 = no premium).
    pub const fn new(percent: u32) -> Self {
        Self { percent }
    }

    /// Percentage applied to each quote.
    pub const fn percent(&self) -> u32 {
        self.percent
    }

    /// Applies the premium to a gas price quote in wei.
    ///
    /// The product is taken in 256 bits so it cannot overflow; a result
    /// past `u128::MAX` is clamped there.
    pub fn apply(&self, quote_wei: u128) -> u128 {
        let bumped = U256::from(quote_wei) * U256::from(self.percent) / U256::from(100u8);
        u128::try_from(bumped).unwrap_or(u128::MAX)
    }
}

impl Default for GasBump {
    fn default() -> Self {
        Self::new(DEFAULT_BUMP_PERCENT)
    }
}
