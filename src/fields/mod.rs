//! Per-record field randomizers: expiration month, expiration year, CVV.
//!
//! Prefix selection lives with the network table in `networks`.

pub mod cvv;
pub mod expiration;

pub use cvv::{sanitize_cvv, select_cvv, validate_cvv, MAX_CVV_LEN};
pub use expiration::{
    month_code, Month, MonthChoice, YearChoice, BASE_YEAR, MONTH_OPTIONS, YEAR_OPTIONS, YEAR_SPAN,
};
