//! Diagnostic queue for collecting and sorting diagnostics.
//!
//! Features:
//! - Append-only collection; every accepted diagnostic is kept
//! - Error limits to prevent overwhelming output
//! - Merging of per-worker queues when files are checked in parallel
//! - Stable sorting by primary location on flush, notes kept with their error

use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped
    /// (0 = unlimited).
    pub error_limit: usize,
}

impl DiagnosticConfig {
    /// Create a config with no limits.
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }

    /// Create a config that stops accepting errors after `limit`.
    pub fn with_error_limit(limit: usize) -> Self {
        DiagnosticConfig { error_limit: limit }
    }
}

/// Queue for collecting and sorting diagnostics.
///
/// Unlike a parser's error queue, nothing is deduplicated: every
/// diagnosed reference is a separate occurrence, and declaration-site
/// notes are counted one per occurrence.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// if queue.push(unavailable_use(name, use_loc, None)) {
///     queue.push(marked_unavailable_here(name, decl_loc));
/// }
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    note_count: usize,
    /// Errors rejected because the limit was reached.
    dropped_errors: usize,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with no error limit.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            note_count: 0,
            dropped_errors: 0,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was
    /// dropped by the error limit. Only errors are ever dropped.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error() {
            if self.limit_reached() {
                self.dropped_errors += 1;
                return false;
            }
            self.error_count += 1;
        } else if diag.is_warning() {
            self.warning_count += 1;
        } else if diag.is_note() {
            self.note_count += 1;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Append all diagnostics of another queue, in its order.
    ///
    /// This queue's error limit applies to the merged diagnostics. Notes
    /// that directly follow a dropped error belong to it and are dropped
    /// too.
    pub fn merge(&mut self, other: DiagnosticQueue) {
        self.dropped_errors += other.dropped_errors;
        let mut orphaned = false;
        for diag in other.diagnostics {
            if diag.is_note() {
                if !orphaned {
                    self.push(diag);
                }
                continue;
            }
            let is_error = diag.is_error();
            orphaned = !self.push(diag) && is_error;
        }
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn note_count(&self) -> usize {
        self.note_count
    }

    /// Number of errors rejected by the limit.
    pub fn dropped_errors(&self) -> usize {
        self.dropped_errors
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by primary location and return them.
    ///
    /// A note stays directly after the diagnostic it was pushed behind:
    /// each diagnostic and its trailing notes sort as one group, keyed on
    /// the leading diagnostic's location. The sort is stable, so groups at
    /// the same location keep their insertion order. Diagnostics without
    /// a location sort last. If errors were dropped, a final "too many
    /// errors" diagnostic is appended. Clears the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut groups: Vec<Vec<Diagnostic>> = Vec::new();
        for diag in self.diagnostics.drain(..) {
            match groups.last_mut() {
                Some(group) if diag.is_note() => group.push(diag),
                _ => groups.push(vec![diag]),
            }
        }
        groups.sort_by_key(|group| group.first().map(sort_key));

        let mut result: Vec<Diagnostic> = groups.into_iter().flatten().collect();
        if self.dropped_errors > 0 {
            result.push(too_many_errors(self.config.error_limit, self.dropped_errors));
        }

        self.error_count = 0;
        self.warning_count = 0;
        self.note_count = 0;
        self.dropped_errors = 0;

        result
    }
}

/// Sort key: located diagnostics first, by location.
fn sort_key(diag: &Diagnostic) -> (bool, Option<fence_ir::Location>) {
    let location = diag.primary_location();
    (location.is_none(), location)
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, dropped: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(format!("aborting after {limit} errors"))
        .with_note(format!("{dropped} further errors were not reported"))
}
