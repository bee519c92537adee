use crate::prelude::{Cases, Real};

///////////////////////////////////////////////////////////////////////////////
// Default params for COVID-19
///////////////////////////////////////////////////////////////////////////////

/// Fraction of serious or critical cases, taken from South Korea in early 2020
/// (many cases and reliable detection).
pub const PROB_SERIOUS: Real = 0.01;
pub const HOSPITALIZED_LOW: Real = 32.0;
pub const HOSPITALIZED_HIGH: Real = 34.0;
pub const REAL_CASES_LOW: Cases = 0;
pub const REAL_CASES_HIGH: Cases = 9_000;

///////////////////////////////////////////////////////////////////////////////
// Numerics
///////////////////////////////////////////////////////////////////////////////

/// Case counts above RU considered when normalizing the posterior.
pub const CASES_MARGIN: Cases = 5_000;

/// Default level for central credible intervals.
pub const CREDIBLE_LEVEL: Real = 0.95;

/// Ratio between the last value of the likelihood curve and its peak above
/// which the truncation margin is considered too small.
pub const TAIL_TOLERANCE: Real = 1e-6;
