use std::fmt;

/// Error codes for all checker diagnostics.
///
/// Format: E#### for errors, W#### for warnings. The first digit
/// indicates the phase:
/// - E3xxx / W3xxx: Scope-attribute errors and warnings
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scope-Attribute Errors (E3xxx)
    /// Reference to a declaration that is unavailable at the use site
    E3001,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9001,

    // Scope-Attribute Warnings (W3xxx)
    /// Reference to a declaration that is deprecated at the use site
    W3001,
}

impl ErrorCode {
    /// Check if this is a scope-attribute code (E3xxx / W3xxx range).
    pub fn is_scope_attribute(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::W3001)
    }

    /// Check if this code denotes a warning.
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Get the code as a string (e.g., "E3001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
            ErrorCode::E9001 => "E9001",
            ErrorCode::W3001 => "W3001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
