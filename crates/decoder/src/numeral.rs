//! The base-4 numeral scheme used for every integer literal.
//!
//! A numeral is one sign digit followed by a base-4 magnitude:
//!
//! ```text
//! 1 or 3   positive
//! 0 or 2   negative
//! ```
//!
//! The sign digit's own value is irrelevant, only its parity. An empty
//! magnitude is zero, so `"1"` and `"0"` both decode to 0.

use crate::error::ParseError;

/// Decode a numeral found on source line `line`.
pub fn decode_numeral(text: &str, line: usize) -> Result<i64, ParseError> {
    let mut chars = text.chars();
    let sign = chars.next().ok_or(ParseError::EmptyArgument { line })?;
    let negative = match sign {
        '1' | '3' => false,
        '0' | '2' => true,
        other => return Err(ParseError::InvalidSign { line, sign: other }),
    };

    let digits = chars.as_str();
    if !digits.chars().all(|c| c.to_digit(4).is_some()) {
        return Err(ParseError::InvalidNumeral {
            line,
            numeral: digits.to_string(),
        });
    }

    let out_of_range = || ParseError::NumeralOutOfRange {
        line,
        numeral: digits.to_string(),
    };

    let mut magnitude: u64 = 0;
    for digit in digits.chars().filter_map(|c| c.to_digit(4)) {
        magnitude = magnitude
            .checked_mul(4)
            .and_then(|m| m.checked_add(u64::from(digit)))
            .ok_or_else(out_of_range)?;
    }

    if negative {
        0i64.checked_sub_unsigned(magnitude).ok_or_else(out_of_range)
    } else {
        i64::try_from(magnitude).map_err(|_| out_of_range())
    }
}

/// Encode a value in canonical form: `1` or `0` for the sign, then the
/// shortest base-4 magnitude (`0` for zero).
pub fn encode_numeral(value: i64) -> String {
    let sign = if value < 0 { '0' } else { '1' };
    let mut magnitude = value.unsigned_abs();

    let mut digits = Vec::new();
    loop {
        digits.push(char::from(b'0' + (magnitude % 4) as u8));
        magnitude /= 4;
        if magnitude == 0 {
            break;
        }
    }

    std::iter::once(sign).chain(digits.into_iter().rev()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_signs() {
        assert_eq!(decode_numeral("13", 1), Ok(3));
        assert_eq!(decode_numeral("33", 1), Ok(3));
    }

    #[test]
    fn negative_signs() {
        assert_eq!(decode_numeral("013", 1), Ok(-7));
        assert_eq!(decode_numeral("213", 1), Ok(-7));
    }

    #[test]
    fn multi_digit_magnitude() {
        // 1020 base 4 = 64 + 8 = 72
        assert_eq!(decode_numeral("11020", 1), Ok(72));
        assert_eq!(decode_numeral("1333", 1), Ok(63));
    }

    #[test]
    fn leading_zeros_in_magnitude() {
        assert_eq!(decode_numeral("10003", 1), Ok(3));
    }

    #[test]
    fn bare_sign_is_zero() {
        assert_eq!(decode_numeral("1", 1), Ok(0));
        assert_eq!(decode_numeral("2", 1), Ok(0));
    }

    #[test]
    fn empty_argument() {
        assert_eq!(
            decode_numeral("", 4),
            Err(ParseError::EmptyArgument { line: 4 })
        );
    }

    #[test]
    fn invalid_sign() {
        assert_eq!(
            decode_numeral("+3", 2),
            Err(ParseError::InvalidSign { line: 2, sign: '+' })
        );
        assert_eq!(
            decode_numeral("43", 2),
            Err(ParseError::InvalidSign { line: 2, sign: '4' })
        );
    }

    #[test]
    fn invalid_numeral() {
        assert_eq!(
            decode_numeral("1124", 6),
            Err(ParseError::InvalidNumeral {
                line: 6,
                numeral: "124".to_string()
            })
        );
    }

    #[test]
    fn extreme_values() {
        // i64::MAX is 2^63 - 1: a 1 followed by thirty-one 3s in base 4.
        let max = format!("11{}", "3".repeat(31));
        assert_eq!(decode_numeral(&max, 1), Ok(i64::MAX));
        // i64::MIN magnitude is 2^63 = "2" followed by 31 zeros in base 4.
        let min = format!("02{}", "0".repeat(31));
        assert_eq!(decode_numeral(&min, 1), Ok(i64::MIN));
    }

    #[test]
    fn out_of_range() {
        let too_big = format!("12{}", "0".repeat(31));
        assert!(matches!(
            decode_numeral(&too_big, 8),
            Err(ParseError::NumeralOutOfRange { line: 8, .. })
        ));
        let way_too_big = format!("1{}", "3".repeat(40));
        assert!(matches!(
            decode_numeral(&way_too_big, 8),
            Err(ParseError::NumeralOutOfRange { line: 8, .. })
        ));
    }

    #[test]
    fn encode_canonical() {
        assert_eq!(encode_numeral(0), "10");
        assert_eq!(encode_numeral(7), "113");
        assert_eq!(encode_numeral(-7), "013");
        assert_eq!(encode_numeral(72), "11020");
    }

    #[test]
    fn encode_extremes_decode_back() {
        for value in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert_eq!(decode_numeral(&encode_numeral(value), 1), Ok(value));
        }
    }
}
