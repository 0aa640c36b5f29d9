//! Property tests over seeds and configurations.

use proptest::prelude::*;

use test_card_gen::core::generate_card_number;
use test_card_gen::networks::all_prefixes;
use test_card_gen::{luhn, CardGenerator, CardRng, GenerationConfig, Network, OutputFormat};

fn network_strategy() -> impl Strategy<Value = Network> {
    prop::sample::select(Network::ALL.to_vec())
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

proptest! {
    #[test]
    fn check_digit_completes_any_digit_string(partial in "[0-9]{1,30}") {
        let full = format!("{}{}", partial, luhn::check_digit(&partial));
        prop_assert!(luhn::is_valid(&full));
    }

    #[test]
    fn changing_one_digit_breaks_the_checksum(partial in "[0-9]{15}", pos in 0usize..16, delta in 1u8..10) {
        let mut digits: Vec<u8> = format!("{}{}", partial, luhn::check_digit(&partial)).into_bytes();
        digits[pos] = b'0' + (digits[pos] - b'0' + delta) % 10;
        let mutated = String::from_utf8(digits).unwrap();
        prop_assert!(!luhn::is_valid(&mutated));
    }

    #[test]
    fn generated_numbers_keep_prefix(seed in any::<u64>(), index in 0usize..25) {
        let prefix = all_prefixes()[index];
        let number = generate_card_number(&mut CardRng::new(seed), prefix, 16);

        prop_assert_eq!(number.len(), 16);
        prop_assert!(number.starts_with(prefix));
        prop_assert!(luhn::is_valid(&number));
    }

    #[test]
    fn batches_honor_config(
        seed in any::<u64>(),
        network in network_strategy(),
        format in format_strategy(),
        include_expiration in any::<bool>(),
        include_cvv in any::<bool>(),
        quantity in 1usize..40,
    ) {
        let mut config = GenerationConfig::default()
            .with_network(network)
            .with_format(format)
            .with_quantity(quantity);
        if !include_expiration {
            config = config.without_expiration();
        }
        if !include_cvv {
            config = config.without_cvv();
        }

        let records = CardGenerator::with_seed(seed).generate_records(&config).unwrap();
        prop_assert_eq!(records.len(), quantity);

        for record in &records {
            prop_assert!(luhn::is_valid(&record.number));
            prop_assert!(network.prefixes().iter().any(|p| record.number.starts_with(p)));
            prop_assert_eq!(record.expiration_month.is_some(), include_expiration);
            prop_assert_eq!(record.expiration_year.is_some(), include_expiration);
            prop_assert_eq!(record.cvv.is_some(), include_cvv);
        }
    }
}
