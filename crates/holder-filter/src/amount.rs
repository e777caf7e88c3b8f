//! Parsing of human-readable token amounts into smallest (18-decimal
//! fixed-point) units.

use alloy_primitives::U256;

/// Number of decimal places carried by the token.
pub const TOKEN_DECIMALS: usize = 18;

/// Smallest-unit multiplier: one token is 10^18 units.
pub const UNITS_PER_TOKEN: U256 = U256::from_limbs([10u64.pow(18), 0, 0, 0]);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("`{0}` is not a decimal token amount")]
    NotDecimal(String),

    #[error("`{0}` has more than {TOKEN_DECIMALS} fractional digits")]
    TooPrecise(String),

    #[error("`{0}` does not fit into 256 bits")]
    Overflow(String),
}

/// Convert a decimal token quantity to smallest units, i.e. scale it by 10^18.
///
/// Thousands-separator commas are stripped before parsing (balance exports
/// group digits that way). Up to [`TOKEN_DECIMALS`] fractional digits are
/// carried over exactly; more than that is rejected rather than rounded.
pub fn parse_token_amount(input: &str) -> Result<U256, AmountError> {
    let not_decimal = || AmountError::NotDecimal(input.to_string());

    let cleaned = input.replace(',', "");
    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(not_decimal());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_decimal());
    }
    if frac.len() > TOKEN_DECIMALS {
        return Err(AmountError::TooPrecise(input.to_string()));
    }

    let whole_tokens = match whole {
        "" => U256::ZERO,
        digits => U256::from_str_radix(digits, 10)
            .map_err(|_| AmountError::Overflow(input.to_string()))?,
    };
    let frac_units = match frac {
        "" => U256::ZERO,
        digits => {
            let padding = U256::pow(
                U256::from(10),
                U256::from(TOKEN_DECIMALS - digits.len()),
            );
            // cannot overflow: the result stays below 10^36
            U256::from_str_radix(digits, 10).map_err(|_| not_decimal())? * padding
        }
    };

    whole_tokens
        .checked_mul(UNITS_PER_TOKEN)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(|| AmountError::Overflow(input.to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", "0")]
    #[case("100", "100000000000000000000")]
    #[case("1,234.5", "1234500000000000000000")]
    #[case("60000", "60000000000000000000000")]
    #[case("0.000000000000000001", "1")]
    #[case(".5", "500000000000000000")]
    #[case("5.", "5000000000000000000")]
    #[case("123456789.123456789123456789", "123456789123456789123456789")]
    fn parses_valid_amounts(#[case] input: &str, #[case] expected: &str) {
        let expected = U256::from_str_radix(expected, 10).unwrap();
        assert_eq!(parse_token_amount(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case(",")]
    #[case(".")]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("-5")]
    #[case("1e18")]
    #[case("12 34")]
    fn rejects_non_decimal_input(#[case] input: &str) {
        assert_eq!(
            parse_token_amount(input),
            Err(AmountError::NotDecimal(input.to_string()))
        );
    }

    #[test]
    fn rejects_more_than_18_fractional_digits() {
        let input = "1.0000000000000000001";
        assert_eq!(
            parse_token_amount(input),
            Err(AmountError::TooPrecise(input.to_string()))
        );
    }

    #[test]
    fn rejects_amounts_beyond_256_bits() {
        let input = "9".repeat(80);
        assert_eq!(
            parse_token_amount(&input),
            Err(AmountError::Overflow(input.clone()))
        );
    }

    #[test]
    fn full_fractional_precision_is_preserved() {
        let a = parse_token_amount("0.999999999999999999").unwrap();
        let b = parse_token_amount("1").unwrap();
        assert_eq!(b - a, U256::from(1));
    }
}
