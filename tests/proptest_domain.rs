//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the gas premium and token-type parsing
//! hold their invariants across random inputs.

use proptest::prelude::*;

use vault_tx_runner::domain::gas::GasBump;
use vault_tx_runner::domain::token::TokenType;

// Quotes up to ~1.2e27 wei keep `quote * percent` far from u128::MAX.
const MAX_QUOTE: u128 = 1 << 90;

// ── Gas Bump Properties ─────────────────────────────────────

proptest! {
    /// The default premium is exactly floor(quote * 125 / 100).
    #[test]
    fn default_bump_is_truncated_125_percent(quote in 0u128..MAX_QUOTE) {
        let bumped = GasBump::default().apply(quote);
        prop_assert_eq!(bumped, quote * 125 / 100);
    }

    /// A premium of at least 100% never offers less than the quote.
    #[test]
    fn bump_never_below_quote(
        quote in any::<u128>(),
        percent in 100u32..400,
    ) {
        let bumped = GasBump::new(percent).apply(quote);
        prop_assert!(bumped >= quote, "bumped {bumped} < quote {quote}");
    }

    /// Higher quotes never produce lower bumped prices.
    #[test]
    fn bump_is_monotonic(
        quote in 0u128..MAX_QUOTE,
        delta in 0u128..1_000_000_000_000,
    ) {
        let bump = GasBump::default();
        prop_assert!(bump.apply(quote + delta) >= bump.apply(quote));
    }

    /// Truncation loses strictly less than one wei.
    #[test]
    fn bump_truncation_loses_less_than_one_wei(quote in 0u128..MAX_QUOTE) {
        let bumped = GasBump::default().apply(quote);
        let exact_times_100 = quote * 125;
        prop_assert!(bumped * 100 <= exact_times_100);
        prop_assert!(exact_times_100 - bumped * 100 < 100);
    }
}

// ── Token Type Properties ───────────────────────────────────

proptest! {
    /// Every u8 parses back to itself.
    #[test]
    fn token_type_parses_every_u8(value in any::<u8>()) {
        let parsed: TokenType = value.to_string().parse().unwrap();
        prop_assert_eq!(parsed.value(), value);
    }

    /// Anything above 255 is rejected.
    #[test]
    fn token_type_rejects_out_of_range(value in 256u32..100_000) {
        prop_assert!(value.to_string().parse::<TokenType>().is_err());
    }
}
