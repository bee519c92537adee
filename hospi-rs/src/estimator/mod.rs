//! The posterior estimator.
//!
//! For every candidate number of total cases `j` in `[0, RU + margin]` we
//! compute `P(hlow < H <= hupp | j)` with H ~ Binomial(j, p). The CDF
//! difference `CDF(hupp) - CDF(hlow)` gives the probability mass in the
//! interval without summing the PMF term by term. With a uniform prior over
//! `j`, the posterior for `[RL, RU]` is the likelihood summed over the interval
//! divided by the sum over all case counts (the normalizing constant P(H)).
mod curve;
mod summary;

pub use curve::*;
pub use summary::*;

use crate::{
    error::Result,
    params::{BayesParams, TAIL_TOLERANCE},
    prelude::{Cases, Real, NAN},
};
use getset::{CopyGetters, Getters};
use log::debug;
use statrs::distribution::{Binomial, DiscreteCDF};
use std::fmt;

/// Likelihood P(hlow < H <= hupp | total cases) for a binomial number of
/// hospitalizations H with `cases` trials.
///
/// Return NaN if the hospitalization rate is not a valid probability.
pub fn likelihood(cases: Cases, params: &BayesParams) -> Real {
    let (low, upp) = params.hospitalized_counts();
    match Binomial::new(params.serious(), cases as u64) {
        // Both CDFs may round to 1.0 independently, so the difference can be a
        // few ulps below zero.
        Ok(dist) => (dist.cdf(upp) - dist.cdf(low)).max(0.0),
        Err(_) => NAN,
    }
}

/// Computes the posterior from a set of validated parameters.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Estimator {
    params: BayesParams,
}

impl Estimator {
    pub fn new(params: BayesParams) -> Result<Self> {
        params.validate()?;
        Ok(Estimator { params })
    }

    /// Single pass over all case counts, accumulating the normalizing constant
    /// and the sum over the interval of interest.
    pub fn run(&self) -> Estimate {
        let params = self.params;
        let upper = params.upper_cases();
        let mut values = Vec::with_capacity(upper + 1);
        let mut norm = 0.0;
        let mut interest = 0.0;

        for j in 0..=upper {
            let value = likelihood(j, &params);
            norm += value;
            if params.contains(j) {
                interest += value;
            }
            values.push(value);
        }
        debug!(
            "evaluated {} case counts: P(H) = {}, sum over [{}, {}] = {}",
            values.len(),
            norm,
            params.rl(),
            params.ru(),
            interest
        );

        Estimate {
            params,
            curve: LikelihoodCurve::new(values),
            norm,
            interest,
            posterior: interest / norm,
        }
    }
}

/// Validate params and compute the estimate.
pub fn estimate(params: BayesParams) -> Result<Estimate> {
    Ok(Estimator::new(params)?.run())
}

/// Result of the estimator.
///
/// `posterior` is NaN when the evidence has zero probability for every case
/// count considered (e.g., p = 0 and hlow > 0).
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Estimate {
    #[getset(get_copy = "pub")]
    params: BayesParams,
    #[getset(get = "pub")]
    curve: LikelihoodCurve,
    #[getset(get_copy = "pub")]
    norm: Real,
    #[getset(get_copy = "pub")]
    interest: Real,
    #[getset(get_copy = "pub")]
    posterior: Real,
}

impl Estimate {
    /// True if the normalizing constant vanished and the posterior is
    /// meaningless.
    pub fn is_degenerate(&self) -> bool {
        !(self.norm > 0.0) || !self.posterior.is_finite()
    }

    /// True if the likelihood is still noticeable at the last case count, i.e.,
    /// the margin above RU was not enough to capture the tail.
    pub fn is_truncated(&self) -> bool {
        !self.is_degenerate() && self.curve.last() > TAIL_TOLERANCE * self.curve.max()
    }

    /// Summary of the full posterior distribution over case counts.
    pub fn summary(&self, level: Real) -> Option<PosteriorSummary> {
        PosteriorSummary::from_curve(&self.curve, level)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(
            f,
            "The estimated probability for there being between {} and {} real cases \
             when between {} and {} hospitalized people (serious and critical cases) \
             are observed, and with a {:5.3}% of true serious cases is of:\n{:5.3}",
            p.rl(),
            p.ru(),
            p.hlow().trunc(),
            p.hupp().trunc(),
            p.serious() * 100.0,
            self.posterior
        )
    }
}
