use crate::{
    error::Result,
    prelude::{Cases, Real, INF},
};
use ndarray::{s, Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Likelihood P(H | total cases) for every case count between 0 and the
/// largest count considered. The value at index j corresponds to j total cases.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LikelihoodCurve {
    data: Array1<Real>,
}

/// A row of the CSV output.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRow {
    pub cases: Cases,
    pub likelihood: Real,
    pub interest: Real,
}

impl LikelihoodCurve {
    pub fn new(values: Vec<Real>) -> Self {
        LikelihoodCurve {
            data: Array1::from(values),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Likelihood for the given number of cases.
    pub fn get(&self, cases: Cases) -> Option<Real> {
        self.data.get(cases).copied()
    }

    /// Iterate over (cases, likelihood) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cases, Real)> + '_ {
        self.data.iter().copied().enumerate()
    }

    pub fn values(&self) -> ArrayView1<'_, Real> {
        self.data.view()
    }

    pub fn to_vec(&self) -> Vec<Real> {
        self.data.to_vec()
    }

    /// Sum over all case counts.
    pub fn total(&self) -> Real {
        self.data.sum()
    }

    /// Sum over the inclusive range [lo, hi], clipped to the curve.
    pub fn sum_range(&self, lo: Cases, hi: Cases) -> Real {
        if self.is_empty() || lo > hi || lo >= self.len() {
            return 0.0;
        }
        let hi = hi.min(self.len() - 1);
        self.data.slice(s![lo..=hi]).sum()
    }

    /// Copy of the curve with every value outside [lo, hi] set to zero.
    pub fn interest_mask(&self, lo: Cases, hi: Cases) -> Array1<Real> {
        self.iter()
            .map(|(j, x)| if lo <= j && j <= hi { x } else { 0.0 })
            .collect()
    }

    /// Largest value or -inf for an empty curve.
    pub fn max(&self) -> Real {
        self.data.iter().cloned().fold(-INF, Real::max)
    }

    /// Case count with the largest likelihood. Ties resolve to the smallest
    /// count.
    pub fn argmax(&self) -> Option<Cases> {
        let mut best: Option<(Cases, Real)> = None;
        for (j, x) in self.iter() {
            match best {
                Some((_, y)) if x <= y => {}
                _ => best = Some((j, x)),
            }
        }
        best.map(|(j, _)| j)
    }

    /// Value at the largest case count, or zero for an empty curve.
    pub fn last(&self) -> Real {
        self.data.iter().last().copied().unwrap_or(0.0)
    }

    /// Rows with the likelihood and the part inside [lo, hi].
    pub fn rows(&self, lo: Cases, hi: Cases) -> impl Iterator<Item = CurveRow> + '_ {
        self.iter().map(move |(cases, likelihood)| CurveRow {
            cases,
            likelihood,
            interest: if lo <= cases && cases <= hi {
                likelihood
            } else {
                0.0
            },
        })
    }

    /// Render curve as CSV data.
    pub fn render_csv(&self, lo: Cases, hi: Cases, sep: char) -> String {
        let mut data = format!("cases{}likelihood{}interest", sep, sep);
        for row in self.rows(lo, hi) {
            data.push('\n');
            data.push_str(&format!(
                "{}{}{}{}{}",
                row.cases, sep, row.likelihood, sep, row.interest
            ));
        }
        return data;
    }

    /// Write curve to a CSV file.
    pub fn write_csv(&self, path: impl AsRef<Path>, lo: Cases, hi: Cases) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in self.rows(lo, hi) {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl From<Vec<Real>> for LikelihoodCurve {
    fn from(values: Vec<Real>) -> Self {
        LikelihoodCurve::new(values)
    }
}
