//! The access-level lattice.
//!
//! Four levels, totally ordered narrowest first:
//!
//! ```text
//! private < fileprivate < internal < public
//! ```
//!
//! The order is derived from declaration order, so `Ord` on `AccessLevel`
//! is the lattice order.

use std::fmt;

/// A visibility boundary.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessLevel {
    /// Visible within the enclosing type and its same-file extensions.
    Private,
    /// Visible within the enclosing file.
    FilePrivate,
    /// Visible within the enclosing module.
    Internal,
    /// Visible everywhere.
    Public,
}

impl AccessLevel {
    /// All levels, narrowest first.
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Private,
        AccessLevel::FilePrivate,
        AccessLevel::Internal,
        AccessLevel::Public,
    ];

    /// The next-narrower level, or `None` below `Private`.
    #[inline]
    pub const fn predecessor(self) -> Option<AccessLevel> {
        match self {
            AccessLevel::Private => None,
            AccessLevel::FilePrivate => Some(AccessLevel::Private),
            AccessLevel::Internal => Some(AccessLevel::FilePrivate),
            AccessLevel::Public => Some(AccessLevel::Internal),
        }
    }

    /// Source keyword for this level.
    pub const fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::FilePrivate => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Public => "public",
        }
    }

    /// Parse a source keyword.
    pub fn from_keyword(keyword: &str) -> Option<AccessLevel> {
        match keyword {
            "private" => Some(AccessLevel::Private),
            "fileprivate" => Some(AccessLevel::FilePrivate),
            "internal" => Some(AccessLevel::Internal),
            "public" => Some(AccessLevel::Public),
            _ => None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
