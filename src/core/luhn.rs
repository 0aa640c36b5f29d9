//! Modulus-10 (Luhn) checksum.
//!
//! Digits are weighted right-to-left. When computing a check digit, the
//! rightmost digit of the partial number sits immediately left of the check
//! position, so it is the first one doubled.

/// Compute the check digit that makes `partial` + digit Luhn-valid.
///
/// `partial` must be ASCII digits; anything else yields an unspecified digit.
///
/// ```
/// use test_card_gen::core::luhn;
///
/// assert_eq!(luhn::check_digit("7992739871"), 3);
/// assert_eq!(luhn::check_digit("411111111111111"), 1);
/// ```
#[must_use]
pub fn check_digit(partial: &str) -> u8 {
    let sum = weighted_sum(partial, true);
    ((10 - sum % 10) % 10) as u8
}

/// Check a complete number, check digit included.
///
/// Empty input or any non-digit character is invalid.
#[must_use]
pub fn is_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    weighted_sum(number, false) % 10 == 0
}

fn weighted_sum(digits: &str, double_first: bool) -> u32 {
    let mut sum = 0u32;
    let mut double = double_first;

    for b in digits.bytes().rev() {
        let mut digit = u32::from(b.wrapping_sub(b'0'));
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_values() {
        assert_eq!(check_digit("7992739871"), 3);
        assert_eq!(check_digit("411111111111111"), 1);
        assert_eq!(check_digit("550000000000000"), 4);
        assert_eq!(check_digit("37828224631000"), 5);
        assert_eq!(check_digit("0"), 0);
    }

    #[test]
    fn test_is_valid_known_numbers() {
        assert!(is_valid("4111111111111111"));
        assert!(is_valid("5500000000000004"));
        assert!(is_valid("378282246310005"));
        assert!(is_valid("6011111111111117"));
        assert!(!is_valid("4111111111111112"));
    }

    #[test]
    fn test_is_valid_rejects_non_digits() {
        assert!(!is_valid(""));
        assert!(!is_valid("4111 1111 1111 1111"));
        assert!(!is_valid("abcd"));
    }

    #[test]
    fn test_check_digit_completes_number() {
        let partial = "412345678901234";
        let full = format!("{}{}", partial, check_digit(partial));
        assert!(is_valid(&full));
    }
}
