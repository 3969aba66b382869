//! Diagnostics, their labels and suggestions, and the scope-attribute templates.

use std::fmt;

use fence_ir::Location;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// Applicability level for code suggestions.
///
/// Indicates how confident we are that a suggestion is correct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Applicability {
    /// The suggestion might be correct but requires human verification.
    /// A `renamed` replacement lands here: the new declaration may have
    /// a different signature.
    MaybeIncorrect,

    /// We don't know how confident the suggestion is.
    #[default]
    Unspecified,
}

/// A replacement offered alongside a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Where the replacement applies.
    pub location: Location,
    /// The replacement text.
    pub snippet: String,
    pub applicability: Applicability,
}

/// A labeled location with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub location: Location,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main diagnostic location).
    pub fn primary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(location: Location, message: impl Into<String>) -> Self {
        Label {
            location,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// Labeled locations showing where the diagnostic applies.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Structured replacement suggestions.
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Create a note. Notes are standalone diagnostics that point at a
    /// related location, such as the declaration behind an error.
    pub fn note(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Note)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the diagnostic location.
    pub fn with_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(location, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, location: Location, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(location, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion that might be incorrect.
    pub fn with_maybe_fix(
        mut self,
        message: impl Into<String>,
        location: Location,
        snippet: impl Into<String>,
    ) -> Self {
        self.suggestions.push(Suggestion {
            message: message.into(),
            location,
            snippet: snippet.into(),
            applicability: Applicability::MaybeIncorrect,
        });
        self
    }

    /// Get the primary location (first primary label's location).
    pub fn primary_location(&self) -> Option<Location> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .map(|l| l.location)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    pub fn is_note(&self) -> bool {
        matches!(self.severity, Severity::Note)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(
                f,
                "\n  {} {:?}:{:?}: {}",
                marker, label.location.file, label.location.span, label.message
            )?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {}", suggestion.message)?;
        }

        Ok(())
    }
}

/// Shared body of the two use-site templates.
fn scoped_use(
    diag: Diagnostic,
    name: &str,
    verb: &str,
    location: Location,
    message: Option<&str>,
) -> Diagnostic {
    let text = match message {
        Some(message) => format!("'{name}' is {verb}: {message}"),
        None => format!("'{name}' is {verb}"),
    };
    diag.with_message(text)
        .with_label(location, format!("'{name}' referenced here"))
}

/// Create an "is deprecated" warning at a use site.
pub fn deprecated_use(name: &str, location: Location, message: Option<&str>) -> Diagnostic {
    scoped_use(
        Diagnostic::warning(ErrorCode::W3001),
        name,
        "deprecated",
        location,
        message,
    )
}

/// Create an "is unavailable" error at a use site.
pub fn unavailable_use(name: &str, location: Location, message: Option<&str>) -> Diagnostic {
    scoped_use(
        Diagnostic::error(ErrorCode::E3001),
        name,
        "unavailable",
        location,
        message,
    )
}

/// Create the declaration-site companion of an "is unavailable" error.
pub fn marked_unavailable_here(name: &str, location: Location) -> Diagnostic {
    Diagnostic::note(ErrorCode::E3001)
        .with_message("marked unavailable here")
        .with_label(location, format!("'{name}' declared here"))
}
