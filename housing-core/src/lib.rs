pub mod calculations;
pub mod models;

pub use calculations::{
    AffordabilityCalculator, InputWarning, compute_net_cost, federal_marginal_rate, validate,
};
pub use models::*;
