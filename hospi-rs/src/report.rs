//! Reporting of estimation results as TOML or CSV.
use crate::{
    error::Result,
    estimator::{Estimate, PosteriorSummary},
    params::{BayesParams, CREDIBLE_LEVEL},
    prelude::{Cases, Real},
    sampler::MonteCarloEstimate,
};
use serde::{Deserialize, Serialize};

pub struct Report<'a> {
    estimate: &'a Estimate,
    level: Real,
    monte_carlo: Option<MonteCarloEstimate>,
}

impl<'a> Report<'a> {
    pub fn new(estimate: &'a Estimate) -> Self {
        Report {
            estimate,
            level: CREDIBLE_LEVEL,
            monte_carlo: None,
        }
    }

    /// Level of the credible interval in the summary.
    pub fn with_level(mut self, level: Real) -> Self {
        self.level = level;
        self
    }

    pub fn with_monte_carlo(mut self, mc: MonteCarloEstimate) -> Self {
        self.monte_carlo = Some(mc);
        self
    }

    pub fn results(&self) -> EstimateResults {
        let est = self.estimate;
        EstimateResults {
            posterior: est.posterior(),
            norm: est.norm(),
            interest: est.interest(),
            cases: est.curve().len(),
            degenerate: est.is_degenerate(),
            truncated: est.is_truncated(),
            params: est.params(),
            summary: est.summary(self.level),
            monte_carlo: self.monte_carlo,
        }
    }

    /// Render results as a TOML document.
    pub fn describe(&self) -> Result<String> {
        Ok(toml::to_string(&self.results())?)
    }

    /// Render the likelihood curve as CSV, with a column holding only the
    /// values in the interval of interest.
    pub fn curve_csv(&self) -> String {
        let params = self.estimate.params();
        self.estimate.curve().render_csv(params.rl(), params.ru(), ',')
    }
}

/// Plain data collected by a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResults {
    pub posterior: Real,
    pub norm: Real,
    pub interest: Real,
    pub cases: Cases,
    pub degenerate: bool,
    pub truncated: bool,
    pub params: BayesParams,
    pub summary: Option<PosteriorSummary>,
    pub monte_carlo: Option<MonteCarloEstimate>,
}
