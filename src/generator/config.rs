//! Generation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::fields::{validate_cvv, MonthChoice, YearChoice};
use crate::format::OutputFormat;
use crate::networks::NetworkChoice;

/// Batch sizes offered to hosts.
pub const QUANTITY_OPTIONS: [usize; 10] = [10, 50, 100, 500, 1000, 2000, 5000, 7000, 8000, 10000];

/// Everything one `generate` call needs.
///
/// Defaults match a freshly reset form: any network, `CARD` output,
/// random expiration and CVV included, 10 records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Network to draw prefixes from.
    pub network: NetworkChoice,

    /// Renderer for each record.
    pub output_format: OutputFormat,

    /// Fill the month and year fields.
    pub include_expiration: bool,

    /// Month used when `include_expiration` is set.
    pub expiration_month: MonthChoice,

    /// Year used when `include_expiration` is set.
    pub expiration_year: YearChoice,

    /// Fill the CVV field.
    pub include_cvv: bool,

    /// CVV to repeat on every record. `None` or empty randomizes.
    pub fixed_cvv: Option<String>,

    /// Number of records. Must be positive.
    pub quantity: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            network: NetworkChoice::Random,
            output_format: OutputFormat::Card,
            include_expiration: true,
            expiration_month: MonthChoice::Random,
            expiration_year: YearChoice::Random,
            include_cvv: true,
            fixed_cvv: None,
            quantity: QUANTITY_OPTIONS[0],
        }
    }
}

impl GenerationConfig {
    /// Load from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the network.
    #[must_use]
    pub fn with_network(mut self, network: impl Into<NetworkChoice>) -> Self {
        self.network = network.into();
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Include an expiration date with the given month and year.
    #[must_use]
    pub fn with_expiration(mut self, month: MonthChoice, year: YearChoice) -> Self {
        self.include_expiration = true;
        self.expiration_month = month;
        self.expiration_year = year;
        self
    }

    /// Leave month and year empty.
    #[must_use]
    pub fn without_expiration(mut self) -> Self {
        self.include_expiration = false;
        self
    }

    /// Include a CVV; `Some` repeats the value on every record.
    #[must_use]
    pub fn with_cvv(mut self, fixed: Option<String>) -> Self {
        self.include_cvv = true;
        self.fixed_cvv = fixed;
        self
    }

    /// Leave the CVV empty.
    #[must_use]
    pub fn without_cvv(mut self) -> Self {
        self.include_cvv = false;
        self
    }

    /// Set the number of records.
    #[must_use]
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Check the invariants: positive quantity, digit-only CVV.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.quantity == 0 {
            return Err(ConfigError::ZeroQuantity);
        }
        if let Some(cvv) = &self.fixed_cvv {
            validate_cvv(cvv)?;
        }
        Ok(())
    }

    /// Like `validate`, and also require one of `QUANTITY_OPTIONS`.
    pub fn validate_strict(&self) -> std::result::Result<(), ConfigError> {
        self.validate()?;
        if !QUANTITY_OPTIONS.contains(&self.quantity) {
            return Err(ConfigError::UnsupportedQuantity(self.quantity));
        }
        Ok(())
    }
}
