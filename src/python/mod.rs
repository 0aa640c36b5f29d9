//! Python bindings for test-card-gen.
//!
//! # Quick Start
//!
//! ```python
//! import test_card_gen as tcg
//!
//! lines = tcg.generate(network="Visa", output_format="JSON", quantity=100, seed=42)
//!
//! assert tcg.is_valid_number(tcg.CardGenerator(seed=1).generate()[0].split(" ")[0])
//! ```

use pyo3::prelude::*;

mod py_generator;

pub use py_generator::*;

/// test_card_gen: Synthetic Luhn-valid card numbers for test fixtures.
#[pymodule]
fn test_card_gen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardGenerator>()?;

    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(luhn_check_digit, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_number, m)?)?;
    m.add_function(wrap_pyfunction!(sanitize_cvv, m)?)?;

    // Option lists
    m.add("NETWORKS", crate::networks::network_options().collect::<Vec<_>>())?;
    m.add(
        "FORMATS",
        crate::format::OutputFormat::ALL
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>(),
    )?;
    m.add("MONTHS", crate::fields::MONTH_OPTIONS.to_vec())?;
    m.add("YEARS", crate::fields::YEAR_OPTIONS.to_vec())?;
    m.add("QUANTITIES", crate::generator::QUANTITY_OPTIONS.to_vec())?;

    Ok(())
}
