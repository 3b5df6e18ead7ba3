//! Error types and result alias for the crate.
//!
//! The only failure surface is construction: a sampler rejects non-positive
//! or non-finite dimensions up front instead of degrading silently.
//! Exhaustion of a sampler is a normal terminal state, not an error.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_formats_message() {
        let err = Error::InvalidConfig("width must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: width must be positive"
        );
    }
}
