// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Luhn checksum validation

/// Returns true when `digits` (ASCII `0`-`9`) pass the Luhn checksum.
///
/// Starting from the rightmost digit, every second digit is doubled and
/// reduced by 9 when the product exceeds 9. The number is valid when the
/// sum of all positions is divisible by 10. An empty slice is never valid.
pub fn is_valid(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    for (i, &b) in digits.iter().rev().enumerate() {
        debug_assert!(b.is_ascii_digit(), "non-digit byte {b:#04x} in Luhn input");
        let mut value = u32::from(b - b'0');
        if i % 2 == 1 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_numbers() {
        assert!(is_valid(b"4532015112830366"));
        assert!(!is_valid(b"4532015112830367"));
        assert!(is_valid(b"378282246310005"));
        assert!(is_valid(b"4111111111111111"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid(b""));
    }

    #[test]
    fn test_short_inputs() {
        assert!(is_valid(b"0"));
        assert!(!is_valid(b"1"));
        // 1*2 + 8 = 10
        assert!(is_valid(b"18"));
        assert!(is_valid(b"79927398713"));
    }

    #[test]
    fn test_all_ones_never_valid_in_card_range() {
        assert!(!is_valid(b"11111111111111"));
        assert!(!is_valid(b"111111111111111"));
        assert!(!is_valid(b"1111111111111111"));
    }
}
