//! Expiration month and year selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CardRng;
use crate::error::ConfigError;
use crate::networks::RANDOM;

/// Month option list. The placeholder holds index 0 so named months map to
/// their 1-based number by position.
pub const MONTH_OPTIONS: [&str; 13] = [
    RANDOM,
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// First year drawn by a random expiration.
pub const BASE_YEAR: u32 = 2025;

/// Number of consecutive years a random expiration draws from.
pub const YEAR_SPAN: u32 = 9;

/// Year option list, `Random` first.
pub const YEAR_OPTIONS: [&str; 10] = [
    RANDOM, "2025", "2026", "2027", "2028", "2029", "2030", "2031", "2032", "2033",
];

/// Two-digit code for a month name, by its position in `MONTH_OPTIONS`.
/// Case-insensitive.
///
/// The lookup is positional, so the `"Random"` placeholder itself yields
/// `"00"`. `MonthChoice::from_str` resolves names through here but takes
/// the random branch for the placeholder first, and `Month::new` rejects 0.
#[must_use]
pub fn month_code(name: &str) -> Option<String> {
    MONTH_OPTIONS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|index| format!("{index:02}"))
}

/// A calendar month, 1 through 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Month(u8);

impl Month {
    /// Create a month from its number. Returns `None` outside 1..=12.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Month number, 1-based.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// English name.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_OPTIONS[self.0 as usize]
    }
}

/// Expiration month selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthChoice {
    #[default]
    Random,
    Named(Month),
}

impl MonthChoice {
    /// Resolve to a zero-padded two-digit month.
    pub fn select(self, rng: &mut CardRng) -> String {
        let number = match self {
            MonthChoice::Random => rng.gen_range(1..13),
            MonthChoice::Named(month) => u32::from(month.number()),
        };
        format!("{number:02}")
    }
}

impl fmt::Display for MonthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthChoice::Random => f.write_str(RANDOM),
            MonthChoice::Named(month) => f.write_str(month.name()),
        }
    }
}

impl FromStr for MonthChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RANDOM) {
            return Ok(MonthChoice::Random);
        }

        // Accept "March", "march" or "3"
        let by_name = month_code(s).and_then(|code| code.parse::<u8>().ok());
        let by_number = s.parse::<u8>().ok();

        by_name
            .or(by_number)
            .and_then(Month::new)
            .map(MonthChoice::Named)
            .ok_or_else(|| ConfigError::UnknownMonth(s.to_string()))
    }
}

impl TryFrom<String> for MonthChoice {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthChoice> for String {
    fn from(choice: MonthChoice) -> Self {
        choice.to_string()
    }
}

/// Expiration year selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YearChoice {
    #[default]
    Random,
    /// A four-digit year, returned unchanged.
    Fixed(String),
}

impl YearChoice {
    /// Resolve to a four-digit year.
    pub fn select(&self, rng: &mut CardRng) -> String {
        match self {
            YearChoice::Random => (BASE_YEAR + rng.gen_range(0..YEAR_SPAN)).to_string(),
            YearChoice::Fixed(year) => year.clone(),
        }
    }
}

impl fmt::Display for YearChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearChoice::Random => f.write_str(RANDOM),
            YearChoice::Fixed(year) => f.write_str(year),
        }
    }
}

impl FromStr for YearChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RANDOM) {
            return Ok(YearChoice::Random);
        }
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(YearChoice::Fixed(s.to_string()));
        }
        Err(ConfigError::InvalidYear(s.to_string()))
    }
}

impl TryFrom<String> for YearChoice {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearChoice> for String {
    fn from(choice: YearChoice) -> Self {
        choice.to_string()
    }
}
