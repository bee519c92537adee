use thiserror::Error;

/// Errors produced while validating parameters or writing results.
///
/// Degenerate statistical inputs are not errors: an estimate whose evidence
/// has zero probability simply carries a NaN posterior.
#[derive(Debug, Error)]
pub enum HospiError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot render report: {0}")]
    Report(#[from] toml::ser::Error),

    #[error("cannot draw plot: {0}")]
    Plot(String),
}

impl HospiError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        HospiError::InvalidParam {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = HospiError> = std::result::Result<T, E>;
