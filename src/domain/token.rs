//! Token descriptors and the vault token-type selector.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

/// An ERC-20 token the swap contract must be allowed to spend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// Token contract address.
    pub address: Address,
    /// Human-readable name used in log lines.
    pub name: String,
}

impl TokenDescriptor {
    /// Creates a descriptor from an address and display name.
    pub fn new(address: Address, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
        }
    }
}

/// Selector passed as the `uint8 tokenType` argument of `create`/`redeem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenType(pub u8);

impl TokenType {
    /// Raw value sent on-chain.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for selectors that are not a `u8`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid token type {0:?}: expected an integer in 0..=255")]
pub struct InvalidTokenType(pub String);

impl FromStr for TokenType {
    type Err = InvalidTokenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| InvalidTokenType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_parses_small_integers() {
        assert_eq!("1".parse::<TokenType>().unwrap(), TokenType(1));
        assert_eq!(" 0 ".parse::<TokenType>().unwrap(), TokenType(0));
        assert_eq!("255".parse::<TokenType>().unwrap().value(), 255);
    }

    #[test]
    fn test_token_type_rejects_garbage() {
        assert!("256".parse::<TokenType>().is_err());
        assert!("-1".parse::<TokenType>().is_err());
        assert!("levETH".parse::<TokenType>().is_err());
        assert!("".parse::<TokenType>().is_err());
    }
}
