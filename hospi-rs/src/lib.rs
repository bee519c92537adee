//! Bayesian estimate of the true number of infections in a population given
//! the number of hospitalized (serious or critical) cases.
//!
//! The likelihood of observing between `hlow` and `hupp` hospitalizations
//! given `j` total cases is binomial with `j` trials and a known rate `p`.
//! Taking a uniform prior over case counts, the posterior probability for an
//! interval `[RL, RU]` of total cases is simply the likelihood summed over the
//! interval and divided by the sum over every case count considered.
//!
//! This is a teaching toy, not a production statistical engine.
pub mod config;
pub mod error;
pub mod estimator;
pub mod params;
pub mod plot;
pub mod prelude;
pub mod report;
pub mod sampler;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::{HospiError, Result};
pub use crate::estimator::{
    estimate, likelihood, Estimate, Estimator, LikelihoodCurve, PosteriorSummary,
};
pub use crate::params::BayesParams;
pub use crate::prelude::{Cases, Real};
pub use crate::report::Report;
pub use crate::sampler::{MonteCarloEstimate, RejectionSampler};
