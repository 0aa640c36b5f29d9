//! Core numeric building blocks: RNG, Luhn checksum, number construction.
//!
//! Nothing here knows about networks or output formats.

pub mod luhn;
pub mod number;
pub mod rng;

pub use number::{generate_card_number, CARD_NUMBER_LENGTH};
pub use rng::{CardRng, CardRngState};
