use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("required price attribute missing on #{element}")]
    MissingRate { element: String },

    #[error("price attribute on #{element} is not a number: {value:?}")]
    InvalidRate { element: String, value: String },

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    #[must_use]
    pub fn missing_rate(element: impl Into<String>) -> Self {
        Self::MissingRate {
            element: element.into(),
        }
    }

    #[must_use]
    pub fn invalid_rate(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidRate {
            element: element.into(),
            value: value.into(),
        }
    }
}
