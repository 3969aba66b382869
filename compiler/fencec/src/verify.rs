//! Expectation matching for checker tests.
//!
//! An [`Expectation`] names a location, a severity, a message substring,
//! and how many diagnostics of that shape should appear there. Matching
//! claims diagnostics greedily in expectation order; a diagnostic is
//! claimed by at most one expectation.

use std::fmt::Write as _;

use fence_diagnostic::{Diagnostic, Severity};
use fence_ir::Location;

/// An expected diagnostic (or group of identical diagnostics).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expectation {
    pub location: Location,
    pub severity: Severity,
    /// Must occur in the diagnostic's message.
    pub substring: String,
    /// How many matching diagnostics are expected.
    pub count: usize,
}

impl Expectation {
    pub fn new(location: Location, severity: Severity, substring: impl Into<String>) -> Self {
        Expectation {
            location,
            severity,
            substring: substring.into(),
            count: 1,
        }
    }

    pub fn error(location: Location, substring: impl Into<String>) -> Self {
        Self::new(location, Severity::Error, substring)
    }

    pub fn warning(location: Location, substring: impl Into<String>) -> Self {
        Self::new(location, Severity::Warning, substring)
    }

    pub fn note(location: Location, substring: impl Into<String>) -> Self {
        Self::new(location, Severity::Note, substring)
    }

    /// Expect `count` identical diagnostics.
    #[must_use]
    pub fn times(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn matches(&self, diag: &Diagnostic) -> bool {
        diag.severity == self.severity
            && diag.primary_location() == Some(self.location)
            && diag.message.contains(&self.substring)
    }
}

/// An expectation that was not met.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shortfall {
    /// Index into the expectations.
    pub expectation: usize,
    /// How many matching diagnostics were found.
    pub found: usize,
}

/// Result of matching diagnostics against expectations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Expectations met exactly.
    pub matched: Vec<usize>,
    /// Expectations with too few matching diagnostics.
    pub unmatched_expectations: Vec<Shortfall>,
    /// Diagnostics no expectation claimed.
    pub unexpected: Vec<usize>,
}

impl VerifyReport {
    /// Every expectation met and nothing unexpected.
    pub fn is_success(&self) -> bool {
        self.unmatched_expectations.is_empty() && self.unexpected.is_empty()
    }

    /// Human-readable summary of the failures.
    pub fn describe(&self, diagnostics: &[Diagnostic], expectations: &[Expectation]) -> String {
        let mut out = String::new();
        for shortfall in &self.unmatched_expectations {
            let exp = &expectations[shortfall.expectation];
            let _ = writeln!(
                out,
                "expected {} {} containing '{}' at {:?}:{:?}, found {}",
                exp.count, exp.severity, exp.substring, exp.location.file, exp.location.span,
                shortfall.found
            );
        }
        for &idx in &self.unexpected {
            let _ = writeln!(out, "unexpected {}", diagnostics[idx]);
        }
        out
    }
}

/// Match `diagnostics` against `expectations`.
pub fn verify(diagnostics: &[Diagnostic], expectations: &[Expectation]) -> VerifyReport {
    let mut claimed = vec![false; diagnostics.len()];
    let mut report = VerifyReport::default();

    for (exp_idx, exp) in expectations.iter().enumerate() {
        let mut found = 0;
        for (diag_idx, diag) in diagnostics.iter().enumerate() {
            if found == exp.count {
                break;
            }
            if !claimed[diag_idx] && exp.matches(diag) {
                claimed[diag_idx] = true;
                found += 1;
            }
        }

        if found == exp.count {
            report.matched.push(exp_idx);
        } else {
            report.unmatched_expectations.push(Shortfall {
                expectation: exp_idx,
                found,
            });
        }
    }

    report.unexpected = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| if c { None } else { Some(i) })
        .collect();

    report
}
