// giftfields/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Product store failure for attribute '{attribute}'. Source: {source}")]
    Store {
        attribute: String,
        #[source]
        source: AnyhowError,
    },

    #[error("Markup rendering failed. Source: {source}")]
    Render {
        #[source]
        source: std::fmt::Error,
    },

    #[error("Internal extension error: {0}")]
    Internal(String),
}

impl From<std::fmt::Error> for ExtensionError {
    fn from(err: std::fmt::Error) -> Self {
        ExtensionError::Render { source: err }
    }
}

// The catch-all conversion for external errors: anything a host store
// surfaces through anyhow without a named attribute lands here.
impl From<AnyhowError> for ExtensionError {
    fn from(err: AnyhowError) -> Self {
        ExtensionError::Store {
            attribute: "<unspecified>".to_string(),
            source: err,
        }
    }
}

pub type ExtensionResult<T, E = ExtensionError> = std::result::Result<T, E>;
