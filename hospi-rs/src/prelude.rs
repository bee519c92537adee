pub use crate::config::Config;
pub use crate::error::{HospiError, Result};
pub use crate::estimator::*;
pub use crate::params::*;
pub use crate::report::Report;
pub use crate::sampler::{binomial_draw, MonteCarloEstimate, RejectionSampler};

/// Number of total (real) cases in a population. Case counts are also used as
/// indexes into the likelihood curve.
pub type Cases = usize;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;
pub(crate) const NAN: Real = Real::NAN;
