//! Batch generation integration tests.
//!
//! These tests drive `CardGenerator` through the public API the way a host
//! does: build a config, generate, inspect the rendered lines.

use test_card_gen::networks::all_prefixes;
use test_card_gen::{
    luhn, CardGenerator, ConfigError, Error, GenerationConfig, MonthChoice, Network,
    NetworkChoice, OutputFormat, YearChoice, CARD_NUMBER_LENGTH, QUANTITY_OPTIONS,
};

fn pipe_fields(line: &str) -> Vec<&str> {
    line.split('|').collect()
}

// =============================================================================
// Numbers
// =============================================================================

/// Every network produces 16-digit, Luhn-valid numbers on its own prefixes.
#[test]
fn test_every_network_prefix_and_checksum() {
    let mut generator = CardGenerator::with_seed(42);

    for network in Network::ALL {
        let config = GenerationConfig::default()
            .with_network(network)
            .with_quantity(200);

        for record in generator.generate_records(&config).unwrap() {
            assert_eq!(record.number.len(), CARD_NUMBER_LENGTH);
            assert!(luhn::is_valid(&record.number), "{}", record.number);
            assert!(
                network.prefixes().iter().any(|p| record.number.starts_with(p)),
                "{} is not a {} number",
                record.number,
                network
            );
        }
    }
}

/// The pooled choice only ever uses registered prefixes.
#[test]
fn test_random_network_uses_pooled_prefixes() {
    let mut generator = CardGenerator::with_seed(3);
    let config = GenerationConfig::default()
        .with_network(NetworkChoice::Random)
        .with_quantity(500);

    for record in generator.generate_records(&config).unwrap() {
        assert!(all_prefixes().iter().any(|p| record.number.starts_with(p)));
    }
}

// =============================================================================
// Quantities
// =============================================================================

/// Every quantity the host offers yields exactly that many lines.
#[test]
fn test_all_supported_quantities() {
    let mut generator = CardGenerator::with_seed(11);

    for quantity in QUANTITY_OPTIONS {
        let config = GenerationConfig::default().with_quantity(quantity);
        assert_eq!(generator.generate(&config).unwrap().len(), quantity);
    }
}

/// Zero is rejected before any record is built.
#[test]
fn test_zero_quantity() {
    let mut generator = CardGenerator::with_seed(11);
    let result = generator.generate(&GenerationConfig::default().with_quantity(0));
    assert!(matches!(result, Err(Error::Config(ConfigError::ZeroQuantity))));
}

// =============================================================================
// Optional fields
// =============================================================================

/// Expiration off: month and year empty, CVV still present.
#[test]
fn test_without_expiration() {
    let mut generator = CardGenerator::with_seed(5);
    let config = GenerationConfig::default()
        .with_format(OutputFormat::Pipe)
        .without_expiration();

    for line in generator.generate(&config).unwrap() {
        let fields = pipe_fields(&line);
        assert_eq!(fields[1], "");
        assert_eq!(fields[2], "");
        assert_eq!(fields[3].len(), 3);
    }
}

/// CVV off: CVV empty, expiration still present.
#[test]
fn test_without_cvv() {
    let mut generator = CardGenerator::with_seed(5);
    let config = GenerationConfig::default()
        .with_format(OutputFormat::Pipe)
        .without_cvv();

    for line in generator.generate(&config).unwrap() {
        let fields = pipe_fields(&line);
        assert_eq!(fields[1].len(), 2);
        assert_eq!(fields[2].len(), 4);
        assert_eq!(fields[3], "");
    }
}

/// A fixed CVV is repeated verbatim, even when shorter than three digits.
#[test]
fn test_fixed_short_cvv() {
    let mut generator = CardGenerator::with_seed(5);
    let config = GenerationConfig::default()
        .with_format(OutputFormat::Pipe)
        .with_cvv(Some("7".to_string()));

    for line in generator.generate(&config).unwrap() {
        assert!(line.ends_with("|7"), "{line}");
    }
}

/// A fixed CVV with letters is a configuration error.
#[test]
fn test_non_digit_cvv_rejected() {
    let mut generator = CardGenerator::with_seed(5);
    let config = GenerationConfig::default().with_cvv(Some("12a".to_string()));
    assert!(generator.generate(&config).is_err());
}

/// Named month and year are used on every record.
#[test]
fn test_fixed_expiration() {
    let mut generator = CardGenerator::with_seed(8);
    let month: MonthChoice = "October".parse().unwrap();
    let year: YearChoice = "2032".parse().unwrap();
    let config = GenerationConfig::default()
        .with_format(OutputFormat::Card)
        .with_expiration(month, year);

    for line in generator.generate(&config).unwrap() {
        assert!(line.contains(" | 10/2032 | "), "{line}");
    }
}

// =============================================================================
// Reproducibility
// =============================================================================

/// Seeded generators replay the same batch; consecutive batches differ.
#[test]
fn test_seeded_batches() {
    let config = GenerationConfig::default().with_quantity(100);

    let mut a = CardGenerator::with_seed(2024);
    let mut b = CardGenerator::with_seed(2024);

    let first = a.generate(&config).unwrap();
    assert_eq!(first, b.generate(&config).unwrap());

    let second = a.generate(&config).unwrap();
    assert_ne!(first, second);
}

/// A config loaded from JSON drives generation like a built one.
#[test]
fn test_json_config() {
    let config = GenerationConfig::from_json(
        r#"{
            "network": "Union Pay",
            "output_format": "SQL",
            "include_cvv": false,
            "quantity": 50
        }"#,
    )
    .unwrap();

    let lines = CardGenerator::with_seed(1).generate(&config).unwrap();
    assert_eq!(lines.len(), 50);
    for line in lines {
        assert!(line.starts_with("('62"), "{line}");
        assert!(line.ends_with(", '')"), "{line}");
    }
}
