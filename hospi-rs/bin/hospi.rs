use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hospi::{
    estimate,
    utils::plot_vbars,
    Cases, Config, RejectionSampler, Real, Report,
};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

const BANNER: &str = "This is a _TOY_ program that gives a bayesian estimate for the real \
cases of COVID-19 in the country, given the hospitalized people. It's only meant for \
teaching statistics and the like. Also, it could be buggy.\n";

/// Bayesian estimate of the real number of cases given the hospitalized
/// (serious and critical) cases, assuming a uniform prior and a binomial
/// P(hospitalized | cases).
#[derive(Debug, Parser)]
#[command(name = "hospi", version, long_about = None)]
struct Cli {
    /// Lower limit for real cases
    #[arg(value_name = "RL", required_unless_present = "config")]
    rl: Option<Cases>,

    /// Upper limit for real cases
    #[arg(value_name = "RU", required_unless_present = "config")]
    ru: Option<Cases>,

    /// True probability of serious cases. Default taken from S. Korea (0.01)
    #[arg(short, long)]
    serious: Option<Real>,

    /// Lower limit for the hospitalized people in the country (default 32)
    #[arg(short = 'l', long)]
    hlow: Option<Real>,

    /// Upper limit for the hospitalized people in the country (default 34)
    #[arg(short = 'u', long)]
    hupp: Option<Real>,

    /// Case counts above RU used to normalize the posterior (default 5000)
    #[arg(short, long)]
    margin: Option<Cases>,

    /// TOML configuration file. Flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write an SVG plot of the likelihood curve
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,

    /// Write the likelihood curve as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Plot the likelihood curve in the terminal
    #[arg(long)]
    ascii: bool,

    /// Level of the credible interval (default 0.95)
    #[arg(long)]
    level: Option<Real>,

    /// Check the estimate with N Monte Carlo draws
    #[arg(long, value_name = "N")]
    simulate: Option<usize>,

    /// Seed for the Monte Carlo draws
    #[arg(long)]
    seed: Option<u64>,

    /// Print a full TOML report
    #[arg(long)]
    report: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Merge command line options into the config file, if any.
    fn into_config(self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("cannot load config from {}", path.display()))?,
            None => Config::default(),
        };
        let params = &mut cfg.params;
        if let Some(v) = self.rl {
            params.set_rl(v);
        }
        if let Some(v) = self.ru {
            params.set_ru(v);
        }
        if let Some(v) = self.serious {
            params.set_serious(v);
        }
        if let Some(v) = self.hlow {
            params.set_hlow(v);
        }
        if let Some(v) = self.hupp {
            params.set_hupp(v);
        }
        if let Some(v) = self.margin {
            params.set_margin(v);
        }
        if let Some(v) = self.level {
            cfg.level = v;
        }
        if self.plot.is_some() {
            cfg.plot = self.plot;
        }
        if self.csv.is_some() {
            cfg.csv = self.csv;
        }
        if self.simulate.is_some() {
            cfg.simulate = self.simulate;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.ascii |= self.ascii;
        cfg.report |= self.report;
        cfg.verbose |= self.verbose;
        Ok(cfg)
    }
}

pub fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cfg = Cli::parse().into_config()?;
    let level = if cfg.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;
    cfg.validate()?;

    let params = cfg.params;
    info!("{:?}", params);
    println!("{}", BANNER);

    let est = estimate(params)?;
    info!(
        "evaluated {} case counts, P(H) = {:.6}",
        est.curve().len(),
        est.norm()
    );
    if est.is_degenerate() {
        warn!("observation has zero probability for every case count; posterior is undefined");
    } else if est.is_truncated() {
        warn!(
            "likelihood is still significant at {} cases, consider a larger margin",
            params.upper_cases()
        );
    }
    println!("{}", est);

    let mut report = Report::new(&est).with_level(cfg.level);

    if let Some(n) = cfg.simulate {
        let mut sampler = RejectionSampler::new(params)?;
        if let Some(seed) = cfg.seed {
            sampler.seed(seed);
        }
        let mc = sampler.run(n);
        println!(
            "Monte Carlo estimate from {} accepted out of {} draws: {:5.3}",
            mc.accepted(),
            mc.draws(),
            mc.posterior()
        );
        report = report.with_monte_carlo(mc);
    }

    if cfg.report {
        println!("\n{}", report.describe()?);
    } else if let Some(st) = est.summary(cfg.level) {
        println!(
            "Posterior mean: {:.1} cases (mode {}), {:.0}% credible interval: {}-{}",
            st.mean(),
            st.mode(),
            100.0 * st.level(),
            st.lower(),
            st.upper()
        );
    }

    if cfg.ascii {
        plot_vbars(est.curve(), params.rl(), params.ru(), 72, 16);
    }

    if let Some(path) = &cfg.plot {
        hospi::plot::render_svg(&est, path, (800, 800))
            .with_context(|| format!("cannot write plot to {}", path.display()))?;
        info!("plot saved to {}", path.display());
    }

    if let Some(path) = &cfg.csv {
        est.curve()
            .write_csv(path, params.rl(), params.ru())
            .with_context(|| format!("cannot write curve to {}", path.display()))?;
        info!("curve saved to {}", path.display());
    }
    Ok(())
}
