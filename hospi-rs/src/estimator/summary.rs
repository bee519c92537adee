use super::LikelihoodCurve;
use crate::{
    prelude::{Cases, Real},
    utils::WeightedStats,
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Summary of the posterior distribution P(cases | H) over all case counts.
///
/// The credible interval is central: each tail outside [lower, upper] holds at
/// most (1 - level) / 2 of the posterior mass.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PosteriorSummary {
    mean: Real,
    std: Real,
    mode: Cases,
    level: Real,
    lower: Cases,
    upper: Cases,
}

impl PosteriorSummary {
    /// Return None for a curve with no positive mass or for a level outside
    /// the (0, 1] range.
    pub fn from_curve(curve: &LikelihoodCurve, level: Real) -> Option<Self> {
        if !(level > 0.0 && level <= 1.0) {
            return None;
        }
        let mut acc = WeightedStats::new();
        for (j, x) in curve.iter() {
            acc.add(j as Real, x);
        }
        let total = acc.weight();
        if !(total > 0.0) {
            return None;
        }

        let tail = 0.5 * (1.0 - level) * total;
        let (mut lower, mut upper) = (None, None);
        let mut cum = 0.0;
        for (j, x) in curve.iter() {
            cum += x;
            if lower.is_none() && cum >= tail {
                lower = Some(j);
            }
            if upper.is_none() && cum >= total - tail {
                upper = Some(j);
                break;
            }
        }

        Some(PosteriorSummary {
            mean: acc.mean(),
            std: acc.std(),
            mode: curve.argmax()?,
            level,
            lower: lower.unwrap_or(0),
            // Rounding may leave the cumulative sum a hair below the total.
            upper: upper.unwrap_or(curve.len() - 1),
        })
    }

    /// Width of the credible interval in number of case counts.
    pub fn width(&self) -> Cases {
        self.upper - self.lower + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn symmetric_curve() {
        let curve: LikelihoodCurve = vec![0.0, 1.0, 2.0, 1.0, 0.0].into();
        let st = PosteriorSummary::from_curve(&curve, 0.5).unwrap();
        assert_approx_eq!(st.mean(), 2.0, 1e-12);
        assert_approx_eq!(st.std(), 0.5_f64.sqrt(), 1e-12);
        assert_eq!(st.mode(), 2);
        assert_eq!((st.lower(), st.upper()), (1, 2));
        assert_eq!(st.width(), 2);
    }

    #[test]
    fn full_level_spans_support() {
        let curve: LikelihoodCurve = vec![0.0, 1.0, 2.0, 1.0, 0.0].into();
        let st = PosteriorSummary::from_curve(&curve, 1.0).unwrap();
        assert_eq!((st.lower(), st.upper()), (0, 3));
    }

    #[test]
    fn degenerate_inputs() {
        let zeros: LikelihoodCurve = vec![0.0; 4].into();
        assert!(PosteriorSummary::from_curve(&zeros, 0.95).is_none());
        let curve: LikelihoodCurve = vec![1.0; 4].into();
        assert!(PosteriorSummary::from_curve(&curve, 0.0).is_none());
        assert!(PosteriorSummary::from_curve(&curve, 1.5).is_none());
    }
}
