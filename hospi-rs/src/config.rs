use crate::{
    error::{HospiError, Result},
    params::{BayesParams, CREDIBLE_LEVEL},
    prelude::Real,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Run configuration, usually read from a TOML file.
///
/// ```toml
/// level = 0.9
/// plot = "posterior.svg"
///
/// [params]
/// rl = 2000
/// ru = 4000
/// serious = 0.01
/// ```
///
/// Every field is optional and command line flags override the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub level: Real,
    pub plot: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub ascii: bool,
    pub simulate: Option<usize>,
    pub seed: Option<u64>,
    pub report: bool,
    pub verbose: bool,
    pub params: BayesParams,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level: CREDIBLE_LEVEL,
            plot: None,
            csv: None,
            ascii: false,
            simulate: None,
            seed: None,
            report: false,
            verbose: false,
            params: Default::default(),
        }
    }
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if !(self.level > 0.0 && self.level <= 1.0) {
            return Err(HospiError::invalid(
                "level",
                format!("must be in the (0, 1] range, got {}", self.level),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn read_config() {
        let cfg = Config::from_toml(
            r#"
            level = 0.9
            plot = "out.svg"
            simulate = 1000

            [params]
            rl = 2000
            ru = 4000
            hupp = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.level, 0.9);
        assert_eq!(cfg.plot, Some(PathBuf::from("out.svg")));
        assert_eq!(cfg.simulate, Some(1000));
        assert_eq!(cfg.params.rl(), 2000);
        assert_eq!(cfg.params.ru(), 4000);
        assert_eq!(cfg.params.hlow(), 32.0);
        assert_eq!(cfg.params.hupp(), 40.0);
    }

    #[test]
    fn invalid_level() {
        let cfg = Config {
            level: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(HospiError::InvalidParam { name: "level", .. })
        ));
    }

    #[test]
    fn malformed_config() {
        assert!(matches!(
            Config::from_toml("level = \"high\""),
            Err(HospiError::Config(_))
        ));
    }
}
