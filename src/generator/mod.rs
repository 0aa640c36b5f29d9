//! Batch generation.
//!
//! ## Key Types
//!
//! - `GenerationConfig`: What to generate and how to render it
//! - `CardRecord`: One unformatted card
//! - `CardGenerator`: Owns the RNG and runs batches
//!
//! ## Example
//!
//! ```
//! use test_card_gen::{CardGenerator, GenerationConfig, Network, OutputFormat};
//!
//! let config = GenerationConfig::default()
//!     .with_network(Network::Visa)
//!     .with_format(OutputFormat::Pipe)
//!     .with_quantity(5);
//!
//! let mut generator = CardGenerator::with_seed(42);
//! let lines = generator.generate(&config).unwrap();
//!
//! assert_eq!(lines.len(), 5);
//! assert!(lines.iter().all(|line| line.starts_with('4')));
//! ```

mod config;
mod record;

pub use config::{GenerationConfig, QUANTITY_OPTIONS};
pub use record::CardRecord;

use tracing::{debug, trace};

use crate::core::{generate_card_number, CardRng, CardRngState, CARD_NUMBER_LENGTH};
use crate::error::Result;
use crate::fields::select_cvv;

/// Runs generation batches against one RNG stream.
///
/// Batches are independent: nothing but the RNG position carries over from
/// one call to the next.
#[derive(Clone, Debug)]
pub struct CardGenerator {
    rng: CardRng,
}

impl CardGenerator {
    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(CardRng::from_entropy())
    }

    /// Create a generator with a fixed seed. Same seed, same batches.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(CardRng::new(seed))
    }

    /// Wrap an existing RNG.
    #[must_use]
    pub fn from_rng(rng: CardRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// RNG checkpoint, for replaying the next batch.
    #[must_use]
    pub fn rng_state(&self) -> CardRngState {
        self.rng.state()
    }

    /// Generate and render `config.quantity` records, in order.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Vec<String>> {
        let format = config.output_format;
        let records = self.generate_records(config)?;
        Ok(records.iter().map(|record| record.render(format)).collect())
    }

    /// Generate `config.quantity` records without rendering them.
    pub fn generate_records(&mut self, config: &GenerationConfig) -> Result<Vec<CardRecord>> {
        config.validate()?;

        debug!(
            seed = self.rng.seed(),
            network = %config.network,
            format = %config.output_format,
            quantity = config.quantity,
            "generating card batch"
        );

        let mut records = Vec::with_capacity(config.quantity);
        for _ in 0..config.quantity {
            let record = self.next_record(config);
            trace!(number = %record.number, "generated card");
            records.push(record);
        }

        Ok(records)
    }

    fn next_record(&mut self, config: &GenerationConfig) -> CardRecord {
        let prefix = config.network.select_prefix(&mut self.rng);
        let number = generate_card_number(&mut self.rng, prefix, CARD_NUMBER_LENGTH);

        let (expiration_month, expiration_year) = if config.include_expiration {
            (
                Some(config.expiration_month.select(&mut self.rng)),
                Some(config.expiration_year.select(&mut self.rng)),
            )
        } else {
            (None, None)
        };

        let cvv = config
            .include_cvv
            .then(|| select_cvv(config.fixed_cvv.as_deref(), &mut self.rng));

        CardRecord {
            number,
            expiration_month,
            expiration_year,
            cvv,
        }
    }
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one batch with an entropy-seeded generator.
pub fn generate(config: &GenerationConfig) -> Result<Vec<String>> {
    CardGenerator::new().generate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::luhn;
    use crate::error::{ConfigError, Error};
    use crate::format::OutputFormat;
    use crate::networks::Network;

    #[test]
    fn test_quantity_respected() {
        let mut generator = CardGenerator::with_seed(42);
        for quantity in [1, 10, 137] {
            let config = GenerationConfig::default().with_quantity(quantity);
            assert_eq!(generator.generate(&config).unwrap().len(), quantity);
        }
    }

    #[test]
    fn test_records_are_valid() {
        let mut generator = CardGenerator::with_seed(7);
        let records = generator
            .generate_records(&GenerationConfig::default().with_quantity(100))
            .unwrap();

        for record in &records {
            assert_eq!(record.number.len(), CARD_NUMBER_LENGTH);
            assert!(luhn::is_valid(&record.number), "{}", record.number);
            assert!(record.expiration_month.is_some());
            assert!(record.expiration_year.is_some());
            assert_eq!(record.cvv().len(), 3);
        }
    }

    #[test]
    fn test_exclusions_leave_fields_empty() {
        let mut generator = CardGenerator::with_seed(1);
        let config = GenerationConfig::default()
            .without_expiration()
            .without_cvv()
            .with_format(OutputFormat::Pipe);

        for line in generator.generate(&config).unwrap() {
            let fields: Vec<&str> = line.split('|').collect();
            assert_eq!(fields.len(), 4);
            assert_eq!(&fields[1..], &["", "", ""]);
        }
    }

    #[test]
    fn test_fixed_values() {
        let mut generator = CardGenerator::with_seed(1);
        let config = GenerationConfig::default()
            .with_network(Network::AmericanExpress)
            .with_expiration("February".parse().unwrap(), "2030".parse().unwrap())
            .with_cvv(Some("9876".to_string()));

        for record in generator.generate_records(&config).unwrap() {
            assert!(record.number.starts_with("34") || record.number.starts_with("37"));
            assert_eq!(record.month(), "02");
            assert_eq!(record.year(), "2030");
            assert_eq!(record.cvv(), "9876");
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let config = GenerationConfig::default().with_quantity(50);
        let a = CardGenerator::with_seed(99).generate(&config).unwrap();
        let b = CardGenerator::with_seed(99).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_state_replays_next_batch() {
        let config = GenerationConfig::default();
        let mut generator = CardGenerator::with_seed(5);
        generator.generate(&config).unwrap();

        let state = generator.rng_state();
        let expected = generator.generate(&config).unwrap();

        let mut replay = CardGenerator::from_rng(CardRng::from_state(&state));
        assert_eq!(replay.generate(&config).unwrap(), expected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut generator = CardGenerator::with_seed(1);
        let err = generator
            .generate(&GenerationConfig::default().with_quantity(0))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ZeroQuantity)));
    }

    #[test]
    fn test_free_function() {
        let lines = generate(&GenerationConfig::default()).unwrap();
        assert_eq!(lines.len(), 10);
    }
}
