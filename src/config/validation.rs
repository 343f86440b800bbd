//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value formats (bind address, upstream URL, prefix shape)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{address}`: {source}")]
    BindAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid upstream base URL `{url}`: {source}")]
    BaseUrl { url: String, source: url::ParseError },

    #[error("upstream base URL `{0}` must use http or https")]
    BaseUrlScheme(String),

    #[error("route prefix `{0}` must start with `/` and name at least one character")]
    PrefixShape(String),

    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,
}

/// Check a configuration for semantic problems, collecting every error.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(source) = config.listener.bind_address.parse::<std::net::SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            source,
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::BaseUrlScheme(
                    config.upstream.base_url.clone(),
                ));
            }
        }
        Err(source) => {
            errors.push(ValidationError::BaseUrl {
                url: config.upstream.base_url.clone(),
                source,
            });
        }
    }

    if !config.route.prefix.starts_with('/') || config.route.prefix.len() < 2 {
        errors.push(ValidationError::PrefixShape(config.route.prefix.clone()));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of validation errors as one line for error messages.
pub fn describe_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
