use crate::prelude::{Real, INF, NAN};
use getset::CopyGetters;

/// Accumulates weighted moments of a sequence of observations.
///
/// Weights need not be normalized. Statistics of an accumulator with no
/// positive weight are NaN.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
pub struct WeightedStats {
    #[getset(get_copy = "pub")]
    n: usize,
    #[getset(get_copy = "pub")]
    weight: Real,
    m1: Real,
    m2: Real,
    #[getset(get_copy = "pub")]
    min: Real,
    #[getset(get_copy = "pub")]
    max: Real,
}

impl WeightedStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add observation x with weight w. Observations with zero weight only
    /// count towards n.
    pub fn add(&mut self, x: Real, w: Real) {
        self.n += 1;
        if w > 0.0 {
            self.weight += w;
            self.m1 += w * x;
            self.m2 += w * x * x;
            self.min = Real::min(x, self.min);
            self.max = Real::max(x, self.max);
        }
    }

    pub fn add_many<I>(&mut self, xs: I)
    where
        I: IntoIterator<Item = (Real, Real)>,
    {
        for (x, w) in xs {
            self.add(x, w);
        }
    }

    pub fn mean(&self) -> Real {
        if self.weight > 0.0 {
            self.m1 / self.weight
        } else {
            NAN
        }
    }

    pub fn var(&self) -> Real {
        if !(self.weight > 0.0) {
            return NAN;
        }
        // Cancellation may produce tiny negative values.
        (self.m2 / self.weight - sqr(self.mean())).max(0.0)
    }

    pub fn std(&self) -> Real {
        self.var().sqrt()
    }
}

impl Default for WeightedStats {
    fn default() -> Self {
        WeightedStats {
            n: 0,
            weight: 0.0,
            m1: 0.0,
            m2: 0.0,
            min: INF,
            max: -INF,
        }
    }
}

#[inline]
pub fn sqr(x: Real) -> Real {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn weighted_stats() {
        let mut acc = WeightedStats::new();
        acc.add(0.0, 0.0);
        acc.add_many(vec![(1.0, 1.0), (2.0, 2.0), (3.0, 1.0)]);
        assert_eq!(acc.n(), 4);
        assert_eq!(acc.weight(), 4.0);
        assert_eq!((acc.min(), acc.max()), (1.0, 3.0));
        assert_approx_eq!(acc.mean(), 2.0, 1e-12);
        assert_approx_eq!(acc.var(), 0.5, 1e-12);
        assert_approx_eq!(sqr(acc.std()), acc.var(), 1e-12);
    }

    #[test]
    fn empty_stats_are_nan() {
        let acc = WeightedStats::new();
        assert!(acc.mean().is_nan());
        assert!(acc.std().is_nan());
    }
}
