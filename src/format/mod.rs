//! Output formats for generated records.
//!
//! Every format renders the same four string fields: number, month, year,
//! CVV. Excluded fields arrive as empty strings and are rendered in place,
//! never dropped.
//!
//! | Format | Example |
//! |--------|---------|
//! | `CARD` | `4000000000000002 \| 01/2030 \| 123` |
//! | `PIPE` | `4000000000000002\|01\|2030\|123` |
//! | `CSV`  | `"4000000000000002","01","2030","123"` |
//! | `SQL`  | `('4000000000000002', '01', '2030', '123')` |
//! | `JSON` | `{"cardNumber":"4000000000000002",...}` |
//! | `XML`  | `<card><number>4000000000000002</number>...</card>` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A text renderer for card records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    #[default]
    Card,
    Pipe,
    Csv,
    Sql,
    Json,
    Xml,
}

/// JSON shape of a rendered record. Field order is the key order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCard<'a> {
    card_number: &'a str,
    expiration_month: &'a str,
    expiration_year: &'a str,
    cvv: &'a str,
}

impl OutputFormat {
    /// All formats, in option-list order.
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Card,
        OutputFormat::Pipe,
        OutputFormat::Csv,
        OutputFormat::Sql,
        OutputFormat::Json,
        OutputFormat::Xml,
    ];

    /// Option-list label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OutputFormat::Card => "CARD",
            OutputFormat::Pipe => "PIPE",
            OutputFormat::Csv => "CSV",
            OutputFormat::Sql => "SQL",
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
        }
    }

    /// Look a format up by label, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Render one record.
    ///
    /// Field values are substituted literally; no quoting or escaping is
    /// applied beyond what JSON string encoding requires.
    #[must_use]
    pub fn render(self, number: &str, month: &str, year: &str, cvv: &str) -> String {
        match self {
            OutputFormat::Card => format!("{number} | {month}/{year} | {cvv}"),
            OutputFormat::Pipe => format!("{number}|{month}|{year}|{cvv}"),
            OutputFormat::Csv => format!("\"{number}\",\"{month}\",\"{year}\",\"{cvv}\""),
            OutputFormat::Sql => format!("('{number}', '{month}', '{year}', '{cvv}')"),
            OutputFormat::Json => render_json(number, month, year, cvv),
            OutputFormat::Xml => format!(
                "<card><number>{number}</number><expMonth>{month}</expMonth>\
                 <expYear>{year}</expYear><cvv>{cvv}</cvv></card>"
            ),
        }
    }
}

fn render_json(number: &str, month: &str, year: &str, cvv: &str) -> String {
    let card = JsonCard {
        card_number: number,
        expiration_month: month,
        expiration_year: year,
        cvv,
    };
    // Serializing a struct of &str into a String cannot fail.
    serde_json::to_string(&card).unwrap_or_default()
}

/// Render by format label; an unrecognized label yields the bare number.
#[must_use]
pub fn render_named(format: &str, number: &str, month: &str, year: &str, cvv: &str) -> String {
    match OutputFormat::from_name(format) {
        Some(format) => format.render(number, month, year, cvv),
        None => number.to_string(),
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_name(s).ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.name().to_string()
    }
}
