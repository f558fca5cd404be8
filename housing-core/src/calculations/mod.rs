//! Cost calculations for the buy-versus-rent estimate.
//!
//! [`calculator`] drives the estimate; the other modules hold the pieces it
//! is built from.

pub mod calculator;
pub mod common;
pub mod mortgage;
pub mod tax_rates;
pub mod validation;

pub use calculator::{AffordabilityCalculator, compute_net_cost};
pub use tax_rates::federal_marginal_rate;
pub use validation::{InputWarning, validate};
