use std::fmt;

/// One hour, in seconds.
pub const HOUR: u32 = 3600;
/// One day, in seconds.
pub const DAY: u32 = 86400;

/// A `Cache-Control` value for public, cacheable responses.
///
/// Renders as `public, max-age=N[, s-maxage=N][, stale-while-revalidate=N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheControl {
    max_age: u32,
    s_maxage: Option<u32>,
    stale_while_revalidate: Option<u32>,
}

impl CacheControl {
    pub const fn public(max_age: u32) -> Self {
        Self {
            max_age,
            s_maxage: None,
            stale_while_revalidate: None,
        }
    }

    /// Shared-cache lifetime.
    pub const fn s_maxage(mut self, seconds: u32) -> Self {
        self.s_maxage = Some(seconds);
        self
    }

    pub const fn stale_while_revalidate(mut self, seconds: u32) -> Self {
        self.stale_while_revalidate = Some(seconds);
        self
    }

    pub fn header_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "public, max-age={}", self.max_age)?;
        if let Some(s_maxage) = self.s_maxage {
            write!(f, ", s-maxage={}", s_maxage)?;
        }
        if let Some(swr) = self.stale_while_revalidate {
            write!(f, ", stale-while-revalidate={}", swr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_age_only() {
        assert_eq!(CacheControl::public(DAY).header_value(), "public, max-age=86400");
    }

    #[test]
    fn test_all_directives_in_order() {
        let cc = CacheControl::public(300).s_maxage(300).stale_while_revalidate(HOUR);
        assert_eq!(cc.header_value(), "public, max-age=300, s-maxage=300, stale-while-revalidate=3600");
    }

    #[test]
    fn test_stale_without_shared_max_age() {
        let cc = CacheControl::public(60).stale_while_revalidate(120);
        assert_eq!(cc.to_string(), "public, max-age=60, stale-while-revalidate=120");
    }
}
