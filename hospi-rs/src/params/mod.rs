//! Parameters of the Bayesian estimate and their default values.
mod bayes_params;
mod constants;

pub use bayes_params::*;
pub use constants::*;
