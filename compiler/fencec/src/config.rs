//! Driver configuration.

/// How a compilation unit is checked.
///
/// None of these settings change which references are diagnosed; they
/// only affect scheduling, caching, and how much output is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Check files in parallel.
    pub parallel: bool,
    /// Memoize decisions per (declaration, use site).
    pub memoize: bool,
    /// Maximum number of errors to report (0 = unlimited).
    pub error_limit: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            parallel: true,
            memoize: true,
            error_limit: 0,
        }
    }
}

impl CheckConfig {
    /// Single-threaded checking with otherwise default settings.
    pub fn sequential() -> Self {
        CheckConfig {
            parallel: false,
            ..CheckConfig::default()
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    #[must_use]
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
