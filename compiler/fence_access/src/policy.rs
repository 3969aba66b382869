//! Diagnose-or-suppress policy for scope attributes.

use fence_diagnostic::Severity;
use fence_ir::{AttrKind, ScopeAttribute};

use crate::{reachable, PrivateScopeMap, Site};

/// Severity of a firing for an attribute kind.
#[inline]
pub const fn severity_for(kind: AttrKind) -> Severity {
    match kind {
        AttrKind::Deprecated => Severity::Warning,
        AttrKind::Unavailable => Severity::Error,
    }
}

/// Decide whether a use of a declaration carrying `attr` must be flagged.
///
/// Returns the severity to report at, or `None` when the use lies inside
/// the attribute's grace ring. An empty ring (no qualifier, or `private`)
/// flags every use, including uses inside the declaring type itself.
///
/// Pure: reads only its arguments.
pub fn should_diagnose(
    attr: &ScopeAttribute,
    decl_site: &Site,
    use_site: &Site,
    scopes: &PrivateScopeMap,
) -> Option<Severity> {
    let exempt = match attr.grace_ring() {
        None => false,
        Some(grace) => reachable(grace, decl_site, use_site, scopes),
    };

    if exempt {
        None
    } else {
        Some(severity_for(attr.kind))
    }
}
