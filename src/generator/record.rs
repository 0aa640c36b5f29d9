//! Generated card records.

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// One synthetic card, before formatting.
///
/// Fields excluded by the configuration are `None` and render as empty
/// strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Luhn-valid card number.
    pub number: String,
    /// Two-digit month, "01" through "12".
    pub expiration_month: Option<String>,
    /// Four-digit year.
    pub expiration_year: Option<String>,
    /// Digit-only CVV.
    pub cvv: Option<String>,
}

impl CardRecord {
    /// The month field, empty when excluded.
    #[must_use]
    pub fn month(&self) -> &str {
        self.expiration_month.as_deref().unwrap_or_default()
    }

    /// The year field, empty when excluded.
    #[must_use]
    pub fn year(&self) -> &str {
        self.expiration_year.as_deref().unwrap_or_default()
    }

    /// The CVV field, empty when excluded.
    #[must_use]
    pub fn cvv(&self) -> &str {
        self.cvv.as_deref().unwrap_or_default()
    }

    /// Render with the given format.
    #[must_use]
    pub fn render(&self, format: OutputFormat) -> String {
        format.render(&self.number, self.month(), self.year(), self.cvv())
    }
}
