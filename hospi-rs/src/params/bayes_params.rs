use super::constants as cte;
use crate::{
    error::{HospiError, Result},
    prelude::{Cases, Real},
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Parameters of the estimate.
///
/// `rl` and `ru` are inclusive bounds on the number of total cases of interest.
/// `hlow` and `hupp` bound the observed number of hospitalized people and
/// `serious` is the (known) probability that a case becomes serious enough to
/// be hospitalized. The likelihood is evaluated for every case count between 0
/// and `ru + margin`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, CopyGetters, Setters)]
#[serde(default)]
#[getset(get_copy = "pub", set = "pub")]
pub struct BayesParams {
    rl: Cases,
    ru: Cases,
    hlow: Real,
    hupp: Real,
    serious: Real,
    margin: Cases,
}

impl Default for BayesParams {
    fn default() -> Self {
        BayesParams {
            rl: cte::REAL_CASES_LOW,
            ru: cte::REAL_CASES_HIGH,
            hlow: cte::HOSPITALIZED_LOW,
            hupp: cte::HOSPITALIZED_HIGH,
            serious: cte::PROB_SERIOUS,
            margin: cte::CASES_MARGIN,
        }
    }
}

impl BayesParams {
    /// Interval of interest [rl, ru] with default values for everything else.
    pub fn new(rl: Cases, ru: Cases) -> Self {
        BayesParams {
            rl,
            ru,
            ..Default::default()
        }
    }

    pub fn with_hospitalized(mut self, hlow: Real, hupp: Real) -> Self {
        self.hlow = hlow;
        self.hupp = hupp;
        self
    }

    pub fn with_serious(mut self, prob: Real) -> Self {
        self.serious = prob;
        self
    }

    pub fn with_margin(mut self, margin: Cases) -> Self {
        self.margin = margin;
        self
    }

    /// Largest case count in the likelihood curve.
    pub fn upper_cases(&self) -> Cases {
        self.ru.saturating_add(self.margin)
    }

    /// True if the case count is inside the interval of interest.
    #[inline]
    pub fn contains(&self, cases: Cases) -> bool {
        self.rl <= cases && cases <= self.ru
    }

    /// Hospitalization bounds as integer counts. The binomial CDF at a real
    /// point x is P(X <= floor(x)).
    pub fn hospitalized_counts(&self) -> (u64, u64) {
        (self.hlow.floor() as u64, self.hupp.floor() as u64)
    }

    /// Check that parameters describe a valid question.
    pub fn validate(&self) -> Result<()> {
        if self.ru < self.rl {
            return Err(HospiError::invalid(
                "ru",
                format!("upper limit {} is smaller than lower limit {}", self.ru, self.rl),
            ));
        }
        // The curve holds ru + margin + 1 values.
        if self.ru.checked_add(self.margin).and_then(|u| u.checked_add(1)).is_none() {
            return Err(HospiError::invalid("margin", "ru + margin overflows"));
        }
        if !self.hlow.is_finite() || self.hlow < 0.0 {
            return Err(HospiError::invalid(
                "hlow",
                format!("must be a non-negative number, got {}", self.hlow),
            ));
        }
        if !self.hupp.is_finite() || self.hupp < self.hlow {
            return Err(HospiError::invalid(
                "hupp",
                format!("must be a number >= hlow ({}), got {}", self.hlow, self.hupp),
            ));
        }
        if !(0.0..=1.0).contains(&self.serious) {
            return Err(HospiError::invalid(
                "serious",
                format!("must be a probability in [0, 1], got {}", self.serious),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_south_korea() {
        let params = BayesParams::new(100, 200);
        assert_eq!(params.rl(), 100);
        assert_eq!(params.ru(), 200);
        assert_eq!(params.serious(), 0.01);
        assert_eq!(params.hospitalized_counts(), (32, 34));
        assert_eq!(params.upper_cases(), 5_200);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn real_bounds_are_floored() {
        let params = BayesParams::default().with_hospitalized(10.7, 20.2);
        assert_eq!(params.hospitalized_counts(), (10, 20));
    }

    #[test]
    fn contains_is_inclusive() {
        let params = BayesParams::new(10, 20);
        assert!(!params.contains(9));
        assert!(params.contains(10));
        assert!(params.contains(20));
        assert!(!params.contains(21));
    }

    #[test]
    fn rejects_invalid_params() {
        let err = |p: BayesParams| match p.validate() {
            Err(HospiError::InvalidParam { name, .. }) => name,
            other => panic!("expected invalid param, got {:?}", other),
        };
        assert_eq!(err(BayesParams::new(20, 10)), "ru");
        assert_eq!(err(BayesParams::default().with_serious(1.5)), "serious");
        assert_eq!(err(BayesParams::default().with_serious(Real::NAN)), "serious");
        assert_eq!(err(BayesParams::default().with_hospitalized(-1.0, 3.0)), "hlow");
        assert_eq!(err(BayesParams::default().with_hospitalized(5.0, 3.0)), "hupp");
        assert_eq!(err(BayesParams::new(0, Cases::MAX)), "margin");
        assert_eq!(err(BayesParams::new(0, Cases::MAX - 5_000)), "margin");
        assert!(BayesParams::new(0, Cases::MAX - 5_001).validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let mut params = BayesParams::default();
        params.set_rl(5).set_ru(50).set_margin(10);
        assert_eq!(params.upper_cases(), 60);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params: BayesParams = toml::from_str("ru = 100\nserious = 0.02").unwrap();
        assert_eq!(params.rl(), 0);
        assert_eq!(params.ru(), 100);
        assert_eq!(params.serious(), 0.02);
        assert_eq!(params.margin(), 5_000);
    }
}
