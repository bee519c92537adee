use assert_approx_eq::assert_approx_eq;
use hospi::{estimate, BayesParams, Cases, Real};
use statrs::distribution::{Binomial, Discrete};

/// P(32 < H <= 34 | n) summed term by term from the PMF.
fn pmf_likelihood(n: Cases, p: Real) -> Real {
    let dist = Binomial::new(p, n as u64).unwrap();
    dist.pmf(33) + dist.pmf(34)
}

fn reference_posterior(rl: Cases, ru: Cases, p: Real) -> Real {
    let interest: Real = (rl..=ru).map(|j| pmf_likelihood(j, p)).sum();
    let norm: Real = (0..=ru + 5_000).map(|j| pmf_likelihood(j, p)).sum();
    interest / norm
}

#[test]
fn default_scenario_matches_pmf_reference() {
    let est = estimate(BayesParams::new(0, 9_000)).unwrap();
    assert_eq!(est.curve().len(), 14_001);
    assert_approx_eq!(est.posterior(), reference_posterior(0, 9_000, 0.01), 1e-9);
    assert!(est.posterior() > 0.999);
}

#[test]
fn partial_interval_matches_pmf_reference() {
    let est = estimate(BayesParams::new(2_000, 4_000)).unwrap();
    let expected = reference_posterior(2_000, 4_000, 0.01);
    assert_approx_eq!(est.posterior(), expected, 1e-9);
    assert!(est.posterior() > 0.1 && est.posterior() < 0.9);
}

#[test]
fn normalizing_constant_is_count_over_rate() {
    // Two hospitalization values (33 and 34), each with total weight 1 / p.
    let est = estimate(BayesParams::new(0, 9_000)).unwrap();
    assert_approx_eq!(est.norm(), 2.0 / 0.01, 1e-6);
}

#[test]
fn likelihood_curve_is_bounded() {
    let est = estimate(BayesParams::new(1_000, 2_000).with_serious(0.03)).unwrap();
    for (j, x) in est.curve().iter() {
        assert!((0.0..=1.0).contains(&x), "likelihood({}) = {}", j, x);
    }
    assert!(est.norm() >= est.interest());
    assert!((0.0..=1.0).contains(&est.posterior()));
}

#[test]
fn widening_interval_never_decreases_posterior() {
    let ru = 4_000;
    let mut last = 0.0;
    for rl in (0..=4_000).rev().step_by(500) {
        let p = estimate(BayesParams::new(rl, ru)).unwrap().posterior();
        assert!(p >= last, "posterior for [{}, {}] = {} < {}", rl, ru, p, last);
        last = p;
    }

    let narrow = estimate(BayesParams::new(2_000, 3_000)).unwrap().posterior();
    let wide = estimate(BayesParams::new(2_000, 4_000)).unwrap().posterior();
    assert!(wide >= narrow);
}

#[test]
fn zero_rate_is_detected() {
    let est = estimate(BayesParams::new(0, 9_000).with_serious(0.0)).unwrap();
    assert!(est.curve().iter().all(|(_, x)| x == 0.0));
    assert_eq!(est.norm(), 0.0);
    assert!(!est.posterior().is_finite());
    assert!(est.is_degenerate());
}

#[test]
fn summary_brackets_the_mode() {
    let est = estimate(BayesParams::new(2_000, 4_000)).unwrap();
    let st = est.summary(0.95).unwrap();
    assert!(st.lower() < st.mode() && st.mode() < st.upper());
    assert!(st.lower() as Real <= st.mean() && st.mean() <= st.upper() as Real);
    // mode of the likelihood for 33-34 hospitalizations at 1%
    assert!((3_200..=3_400).contains(&st.mode()));
}
