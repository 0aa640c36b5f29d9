//! Card number construction: prefix, random padding, check digit.

use super::luhn;
use super::rng::CardRng;

/// Length of every generated card number.
pub const CARD_NUMBER_LENGTH: usize = 16;

/// Build a Luhn-valid number of `length` digits starting with `prefix`.
///
/// Random digits are appended until the number is one short of `length`,
/// then the check digit is added. A prefix already at or past `length - 1`
/// gets no padding, only the check digit.
pub fn generate_card_number(rng: &mut CardRng, prefix: &str, length: usize) -> String {
    let mut number = String::with_capacity(length.max(prefix.len() + 1));
    number.push_str(prefix);

    while number.len() + 1 < length {
        number.push(char::from(b'0' + rng.digit()));
    }

    let check = luhn::check_digit(&number);
    number.push(char::from(b'0' + check));
    number
}
