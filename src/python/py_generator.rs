//! Generator bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::luhn;
use crate::error::ConfigError;
use crate::generator::{CardGenerator, GenerationConfig};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[allow(clippy::too_many_arguments)]
fn build_config(
    network: &str,
    output_format: &str,
    include_expiration: bool,
    expiration_month: &str,
    expiration_year: &str,
    include_cvv: bool,
    cvv: Option<String>,
    quantity: usize,
) -> Result<GenerationConfig, ConfigError> {
    let mut config = GenerationConfig::default()
        .with_network(network.parse::<crate::networks::NetworkChoice>()?)
        .with_format(output_format.parse()?)
        .with_expiration(expiration_month.parse()?, expiration_year.parse()?)
        .with_cvv(cvv.filter(|c| !c.is_empty()))
        .with_quantity(quantity);

    if !include_expiration {
        config = config.without_expiration();
    }
    if !include_cvv {
        config = config.without_cvv();
    }

    config.validate()?;
    Ok(config)
}

/// Python wrapper for CardGenerator.
///
/// Holds one RNG stream across calls, so consecutive batches differ while
/// the whole sequence stays reproducible from the seed.
#[pyclass(name = "CardGenerator")]
pub struct PyCardGenerator(CardGenerator);

#[pymethods]
impl PyCardGenerator {
    /// Create a generator; omit `seed` for an entropy-seeded one.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(CardGenerator::with_seed(seed)),
            None => Self(CardGenerator::new()),
        }
    }

    /// Seed of the underlying stream.
    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    /// Generate one batch of formatted records.
    #[pyo3(signature = (
        network="Random",
        output_format="CARD",
        include_expiration=true,
        expiration_month="Random",
        expiration_year="Random",
        include_cvv=true,
        cvv=None,
        quantity=10,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn generate(
        &mut self,
        network: &str,
        output_format: &str,
        include_expiration: bool,
        expiration_month: &str,
        expiration_year: &str,
        include_cvv: bool,
        cvv: Option<String>,
        quantity: usize,
    ) -> PyResult<Vec<String>> {
        let config = build_config(
            network,
            output_format,
            include_expiration,
            expiration_month,
            expiration_year,
            include_cvv,
            cvv,
            quantity,
        )
        .map_err(to_py_err)?;

        self.0.generate(&config).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!("CardGenerator(seed={})", self.0.seed())
    }
}

/// Generate one batch of formatted records.
#[pyfunction]
#[pyo3(signature = (
    network="Random",
    output_format="CARD",
    include_expiration=true,
    expiration_month="Random",
    expiration_year="Random",
    include_cvv=true,
    cvv=None,
    quantity=10,
    seed=None,
))]
#[allow(clippy::too_many_arguments)]
pub fn generate(
    network: &str,
    output_format: &str,
    include_expiration: bool,
    expiration_month: &str,
    expiration_year: &str,
    include_cvv: bool,
    cvv: Option<String>,
    quantity: usize,
    seed: Option<u64>,
) -> PyResult<Vec<String>> {
    let mut generator = PyCardGenerator::new(seed);
    generator.generate(
        network,
        output_format,
        include_expiration,
        expiration_month,
        expiration_year,
        include_cvv,
        cvv,
        quantity,
    )
}

/// Check digit that completes `partial`.
#[pyfunction]
pub fn luhn_check_digit(partial: &str) -> PyResult<u8> {
    if partial.is_empty() || !partial.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PyValueError::new_err("expected a non-empty string of digits"));
    }
    Ok(luhn::check_digit(partial))
}

/// Whether `number` passes the Luhn check.
#[pyfunction]
pub fn is_valid_number(number: &str) -> bool {
    luhn::is_valid(number)
}

/// Digits-only, at most four characters.
#[pyfunction]
pub fn sanitize_cvv(input: &str) -> String {
    crate::fields::sanitize_cvv(input)
}
