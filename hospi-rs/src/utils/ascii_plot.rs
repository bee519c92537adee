use crate::{
    estimator::LikelihoodCurve,
    prelude::{Cases, Real, INF},
};

/// ASCII plot of a likelihood curve.
///
/// The curve is split into at most `width` columns and each column shows the
/// largest value of its bucket, filled up to the maximum `height`. Columns that
/// overlap the [lo, hi] interval are drawn with '#', the others with '*'.
pub fn render_vbars(
    curve: &LikelihoodCurve,
    lo: Cases,
    hi: Cases,
    width: usize,
    height: usize,
) -> String {
    let n = curve.len();
    if n == 0 || width == 0 {
        return String::new();
    }
    let width = width.min(n);
    let values = curve.values();

    let mut columns = Vec::with_capacity(width);
    for k in 0..width {
        let (start, end) = (k * n / width, (k + 1) * n / width);
        let max = values
            .slice(ndarray::s![start..end])
            .iter()
            .cloned()
            .fold(-INF, Real::max);
        let mark = if start <= hi && lo < end { '#' } else { '*' };
        columns.push((max, mark));
    }

    let max = columns.iter().fold(-INF, |acc, &(x, _)| acc.max(x));
    let step = max / height.max(1) as Real;
    let mut lines = Vec::with_capacity(height + 1);

    for i in 0..height + 1 {
        let h = (height - i) as Real * step;
        let ln: String = columns
            .iter()
            .map(|&(x, mark)| if x > 0.0 && x >= h { mark } else { ' ' })
            .collect();
        lines.push(ln);
    }
    lines.join("\n")
}

/// Print the ASCII plot of a likelihood curve. See render_vbars().
pub fn plot_vbars(curve: &LikelihoodCurve, lo: Cases, hi: Cases, width: usize, height: usize) {
    println!("{}", render_vbars(curve, lo, hi, width, height));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_column_per_value() {
        let curve: LikelihoodCurve = vec![0.0, 1.0, 2.0, 1.0, 0.0].into();
        let plot = render_vbars(&curve, 2, 2, 10, 2);
        assert_eq!(plot, "  #  \n *#* \n *#* ");
    }

    #[test]
    fn buckets_keep_maximum() {
        let curve: LikelihoodCurve = vec![0.0, 1.0, 2.0, 1.0, 0.0, 0.0].into();
        let plot = render_vbars(&curve, 0, 1, 3, 1);
        assert_eq!(plot, " * \n#* ");
    }

    #[test]
    fn empty_plots() {
        assert_eq!(render_vbars(&LikelihoodCurve::default(), 0, 0, 10, 5), "");
        let zeros: LikelihoodCurve = vec![0.0; 3].into();
        assert_eq!(render_vbars(&zeros, 0, 0, 3, 1), "   \n   ");
    }
}
