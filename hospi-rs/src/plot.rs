//! SVG chart of the likelihood curve.
use crate::{
    error::{HospiError, Result},
    estimator::Estimate,
    prelude::Real,
};
use plotters::prelude::*;
use std::{fmt::Display, path::Path};

fn plot_error(err: impl Display) -> HospiError {
    HospiError::Plot(err.to_string())
}

/// Draw P(H | cases) against the number of cases and shade the interval of
/// interest. The probability of the interval is shown in the title.
pub fn render_svg(estimate: &Estimate, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
    let params = estimate.params();
    let curve = estimate.curve();
    let x_max = (curve.len().max(2) - 1) as Real;
    let y_max = match curve.max() {
        y if y > 0.0 => 1.05 * y,
        _ => 1.0,
    };

    let root = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let title = format!(
        "Prob. for total cases given {}-{} serious cases and a true {:3.2}% serious. \
         Total cases in [{}, {}] (red): {:5.3}",
        params.hlow(),
        params.hupp(),
        params.serious() * 100.0,
        params.rl(),
        params.ru(),
        estimate.posterior()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Total cases")
        .y_desc("P(H | cases)")
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(AreaSeries::new(
            curve
                .iter()
                .filter(|&(j, _)| params.contains(j))
                .map(|(j, x)| (j as Real, x)),
            0.0,
            &RED.mix(0.3),
        ))
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|(j, x)| (j as Real, x)),
            &BLUE,
        ))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{estimator::estimate, params::BayesParams};

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.svg");
        let params = BayesParams::new(10, 30)
            .with_hospitalized(4.0, 8.0)
            .with_serious(0.2)
            .with_margin(100);
        let est = estimate(params).unwrap();
        render_svg(&est, &path, (640, 480)).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        assert!(data.contains("<svg"));
        assert!(data.contains("Total cases"));
    }

    #[test]
    fn degenerate_curve_still_plots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");
        let params = BayesParams::new(0, 10).with_serious(0.0).with_margin(10);
        let est = estimate(params).unwrap();
        assert!(render_svg(&est, &path, (320, 240)).is_ok());
    }
}
