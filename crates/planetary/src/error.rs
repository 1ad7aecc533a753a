use thiserror::Error;

/// Errors raised while loading or validating habitability criteria
#[derive(Error, Debug)]
pub enum CriteriaError {
    #[error("Failed to parse habitability criteria: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Habitability bound `{field}` must be finite and non-negative, got {value}")]
    InvalidBound { field: &'static str, value: f64 },

    #[error("Inverted {band} band: minimum {min} exceeds maximum {max}")]
    InvertedBand {
        band: &'static str,
        min: f64,
        max: f64,
    },
}

pub type CriteriaResult<T> = Result<T, CriteriaError>;
