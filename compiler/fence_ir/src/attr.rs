//! Scope attributes.
//!
//! A scope attribute marks a declaration as deprecated or unavailable
//! outside some access boundary:
//!
//! ```text
//! @available(*, deprecated)               // everywhere
//! @available(*, unavailable fileprivate)  // outside the enclosing type
//! @available(*, deprecated public)        // outside the module
//! ```

use std::fmt;

use crate::{AccessLevel, Name, Span};

/// What a scope attribute asserts about its declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrKind {
    /// Uses outside the grace ring are warned about.
    Deprecated,
    /// Uses outside the grace ring are rejected.
    Unavailable,
}

impl AttrKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            AttrKind::Deprecated => "deprecated",
            AttrKind::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `deprecated` / `unavailable` attribute attached to a declaration.
///
/// Attached once when the declaration is bound and never mutated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScopeAttribute {
    pub kind: AttrKind,
    /// Boundary beyond which the declaration is flagged.
    pub qualifier: Option<AccessLevel>,
    /// Free-form explanation appended to the diagnostic.
    pub message: Option<Name>,
    /// Replacement declaration name, offered as a suggestion.
    pub renamed: Option<Name>,
    /// Location of the attribute itself.
    pub span: Span,
}

impl ScopeAttribute {
    /// Create an attribute with no message or rename.
    pub const fn new(kind: AttrKind, qualifier: Option<AccessLevel>) -> Self {
        ScopeAttribute {
            kind,
            qualifier,
            message: None,
            renamed: None,
            span: Span::DUMMY,
        }
    }

    pub const fn deprecated(qualifier: Option<AccessLevel>) -> Self {
        Self::new(AttrKind::Deprecated, qualifier)
    }

    pub const fn unavailable(qualifier: Option<AccessLevel>) -> Self {
        Self::new(AttrKind::Unavailable, qualifier)
    }

    #[must_use]
    pub fn with_message(mut self, message: Name) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn with_renamed(mut self, renamed: Name) -> Self {
        self.renamed = Some(renamed);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The level whose reach is exempt from diagnosis.
    ///
    /// This is one step narrower than the qualifier. A missing qualifier
    /// behaves like `private`, and both yield `None`: the empty ring, where
    /// every use is diagnosed.
    #[inline]
    pub const fn grace_ring(&self) -> Option<AccessLevel> {
        match self.qualifier {
            Some(level) => level.predecessor(),
            None => None,
        }
    }
}
