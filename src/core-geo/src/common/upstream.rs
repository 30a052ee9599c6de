//! Limits applied to upstream HTTP fetches (sitemaps, CMS queries).

use std::env::VarError;
use std::num::ParseIntError;
use std::time::Duration;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of child sitemaps fetched at once.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

/// Retrieves the upstream request timeout from `UPSTREAM_TIMEOUT_S`.
pub fn upstream_timeout() -> Result<Duration, ParseIntError> {
    let secs = match std::env::var("UPSTREAM_TIMEOUT_S") {
        Ok(v) => v.trim().parse::<u64>()?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}

/// Retrieves the child sitemap fetch concurrency from `SITEMAP_FETCH_CONCURRENCY`.
pub fn fetch_concurrency() -> Result<usize, FetchConcurrencyError> {
    let value = std::env::var("SITEMAP_FETCH_CONCURRENCY")?.trim().parse::<usize>()?;
    if value == 0 {
        return Err(FetchConcurrencyError::NonPositive);
    }
    Ok(value)
}

/// Same as fetch_concurrency but falls back to the default when the variable is unset.
pub fn fetch_concurrency_or_default() -> Result<usize, FetchConcurrencyError> {
    match fetch_concurrency() {
        Err(FetchConcurrencyError::MissingEnvVar(_)) => Ok(DEFAULT_FETCH_CONCURRENCY),
        other => other,
    }
}

#[derive(Debug)]
pub enum FetchConcurrencyError {
    ParseIntError(ParseIntError),
    NonPositive,
    MissingEnvVar(VarError),
}

impl std::error::Error for FetchConcurrencyError {}

impl From<ParseIntError> for FetchConcurrencyError {
    fn from(error: ParseIntError) -> Self {
        Self::ParseIntError(error)
    }
}

impl From<VarError> for FetchConcurrencyError {
    fn from(error: VarError) -> Self {
        Self::MissingEnvVar(error)
    }
}

impl std::fmt::Display for FetchConcurrencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::ParseIntError(e) => write!(f, "Failed to parse environment variable value as an integer: {}", e),
            Self::NonPositive => write!(f, "SITEMAP_FETCH_CONCURRENCY must be a positive number"),
            Self::MissingEnvVar(e) => write!(f, "Environment variable SITEMAP_FETCH_CONCURRENCY is missing: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::lock_env;

    #[test]
    fn test_timeout_default() {
        let _guard = lock_env();
        unsafe {
            std::env::remove_var("UPSTREAM_TIMEOUT_S");
        }
        assert_eq!(upstream_timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_timeout_from_env() {
        let _guard = lock_env();
        unsafe {
            std::env::set_var("UPSTREAM_TIMEOUT_S", " 3 ");
        }
        let timeout = upstream_timeout();
        unsafe {
            std::env::remove_var("UPSTREAM_TIMEOUT_S");
        }
        assert_eq!(timeout.unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_concurrency_default_and_zero() {
        let _guard = lock_env();
        unsafe {
            std::env::remove_var("SITEMAP_FETCH_CONCURRENCY");
        }
        assert_eq!(fetch_concurrency_or_default().unwrap(), DEFAULT_FETCH_CONCURRENCY);

        unsafe {
            std::env::set_var("SITEMAP_FETCH_CONCURRENCY", "0");
        }
        let result = fetch_concurrency_or_default();
        unsafe {
            std::env::remove_var("SITEMAP_FETCH_CONCURRENCY");
        }
        assert!(matches!(result, Err(FetchConcurrencyError::NonPositive)));
    }
}
