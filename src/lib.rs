//! # test-card-gen
//!
//! Synthetic card numbers for software testing.
//!
//! Each record is a network prefix padded with random digits to 16 places
//! and closed with a Luhn check digit, optionally followed by an expiration
//! date and a CVV, rendered as one line of `CARD`, `PIPE`, `CSV`, `SQL`,
//! `JSON` or `XML`.
//!
//! None of the numbers belong to real accounts. The prefixes are
//! illustrative only and no issuer ranges are checked.
//!
//! ## Modules
//!
//! - `core`: Seedable RNG, Luhn checksum, number construction
//! - `networks`: Networks and their prefix table
//! - `fields`: Expiration month/year and CVV randomizers
//! - `format`: Output renderers
//! - `generator`: Configuration, records, batch generation
//!
//! ## Example
//!
//! ```
//! use test_card_gen::{generate, GenerationConfig, OutputFormat};
//!
//! let config = GenerationConfig::default()
//!     .with_format(OutputFormat::Csv)
//!     .without_cvv();
//!
//! let lines = generate(&config).unwrap();
//! assert_eq!(lines.len(), 10);
//! assert!(lines[0].ends_with(r#","""#));
//! ```

pub mod core;
pub mod error;
pub mod fields;
pub mod format;
pub mod generator;
pub mod networks;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{luhn, CardRng, CardRngState, CARD_NUMBER_LENGTH};
pub use crate::error::{ConfigError, Error, Result};
pub use crate::fields::{month_code, sanitize_cvv, Month, MonthChoice, YearChoice};
pub use crate::format::{render_named, OutputFormat};
pub use crate::generator::{generate, CardGenerator, CardRecord, GenerationConfig, QUANTITY_OPTIONS};
pub use crate::networks::{Network, NetworkChoice};
