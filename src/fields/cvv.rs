//! CVV selection.

use crate::core::CardRng;
use crate::error::ConfigError;

/// Longest CVV a caller may fix.
pub const MAX_CVV_LEN: usize = 4;

/// Resolve the CVV for one record.
///
/// A non-empty fixed value is returned verbatim whatever its length;
/// otherwise a uniform three-digit value in 100..=999.
pub fn select_cvv(fixed: Option<&str>, rng: &mut CardRng) -> String {
    match fixed {
        Some(cvv) if !cvv.is_empty() => cvv.to_string(),
        _ => rng.gen_range(100..1000).to_string(),
    }
}

/// Reduce free text to what a CVV field accepts: digits only, at most
/// `MAX_CVV_LEN` of them.
#[must_use]
pub fn sanitize_cvv(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_CVV_LEN)
        .collect()
}

/// Check a fixed CVV against the configuration invariants.
pub fn validate_cvv(cvv: &str) -> Result<(), ConfigError> {
    if !cvv.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::NonDigitCvv(cvv.to_string()));
    }
    if cvv.len() > MAX_CVV_LEN {
        return Err(ConfigError::CvvTooLong {
            len: cvv.len(),
            max: MAX_CVV_LEN,
        });
    }
    Ok(())
}
