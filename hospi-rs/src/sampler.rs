use crate::{
    error::Result,
    params::BayesParams,
    prelude::{Cases, Real, NAN},
};
use getset::CopyGetters;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Monte Carlo version of the estimate. It makes Bayes' rule tangible: draw a
/// number of total cases from the uniform prior, draw the number of
/// hospitalized people for those cases and keep only the draws that agree with
/// the observation. The fraction of kept draws inside [RL, RU] converges to the
/// posterior computed by the estimator.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    params: BayesParams,
    rng: SmallRng,
}

/// Number of successes in `n` Bernoulli trials with probability `p`.
///
/// Walks from success to success with geometric waiting times, so the cost is
/// proportional to the number of successes (or failures, for p > 1/2) and not
/// to `n`.
pub fn binomial_draw<R: Rng>(rng: &mut R, n: u64, p: Real) -> u64 {
    if n == 0 || !(p > 0.0) {
        return 0;
    }
    if p >= 1.0 {
        return n;
    }
    if p > 0.5 {
        return n - binomial_draw(rng, n, 1.0 - p);
    }

    let log_q = (-p).ln_1p();
    let mut count = 0;
    let mut trial: u64 = 0;
    loop {
        // U in (0, 1] so the log is finite
        let u: Real = 1.0 - rng.gen::<Real>();
        let skip = (u.ln() / log_q).floor() as u64;
        trial = trial.saturating_add(skip).saturating_add(1);
        if trial > n {
            return count;
        }
        count += 1;
    }
}

/// Counts collected by the rejection sampler.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct MonteCarloEstimate {
    draws: usize,
    accepted: usize,
    in_range: usize,
    posterior: Real,
}

impl MonteCarloEstimate {
    /// Fraction of draws compatible with the observation. It estimates P(H)
    /// divided by the number of case counts in the prior.
    pub fn acceptance(&self) -> Real {
        self.accepted as Real / self.draws as Real
    }
}

impl RejectionSampler {
    pub fn new(params: BayesParams) -> Result<Self> {
        params.validate()?;
        Ok(RejectionSampler {
            params,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Reseed the random number generator.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Draw a (total cases, hospitalized) pair from the joint distribution.
    pub fn draw(&mut self) -> (Cases, u64) {
        let p = self.params.serious();
        let cases = self.rng.gen_range(0..=self.params.upper_cases());
        let hospitalized = binomial_draw(&mut self.rng, cases as u64, p);
        (cases, hospitalized)
    }

    /// Run n draws. The posterior is NaN if no draw is compatible with the
    /// observation.
    pub fn run(&mut self, n: usize) -> MonteCarloEstimate {
        let (low, upp) = self.params.hospitalized_counts();
        let mut out = MonteCarloEstimate {
            draws: n,
            ..Default::default()
        };

        for _ in 0..n {
            let (cases, hospitalized) = self.draw();
            if low < hospitalized && hospitalized <= upp {
                out.accepted += 1;
                if self.params.contains(cases) {
                    out.in_range += 1;
                }
            }
        }
        out.posterior = if out.accepted > 0 {
            out.in_range as Real / out.accepted as Real
        } else {
            NAN
        };
        debug!(
            "rejection sampler accepted {} of {} draws",
            out.accepted, out.draws
        );
        out
    }
}
