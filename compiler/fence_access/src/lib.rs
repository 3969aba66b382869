//! Scope-relative attribute enforcement.
//!
//! Decides, for a reference to a declaration marked `deprecated` or
//! `unavailable` outside some access boundary, whether the reference must
//! be diagnosed and at what severity.
//!
//! # Pipeline
//!
//! ```text
//! Program ──► PrivateScopeMap (once per compilation unit)
//!     │
//!     ▼
//! SiteLocator ──► Site (decl) + Site (use)
//!     │
//!     ▼
//! reachable(grace ring, decl site, use site)
//!     │
//!     ▼
//! should_diagnose ──► Option<Severity>
//!     │
//!     ▼
//! DiagnosticAggregator ──► use-site diagnostic (+ declaration-site note)
//! ```
//!
//! # Grace Ring
//!
//! An attribute qualified with level `Q` exempts every use that could see
//! a symbol declared at `predecessor(Q)`. `private` and a missing
//! qualifier have an empty ring: every use is diagnosed, including uses
//! inside the declaring type.

mod aggregator;
mod checker;
mod locator;
mod policy;
mod reachability;
mod scope_map;

#[cfg(test)]
mod test_helpers;

pub use aggregator::{AggregateOutput, DeclCounts, DiagnosticAggregator};
pub use checker::{CacheStats, Firing, ScopeChecker};
pub use locator::{Site, SiteLocator};
pub use policy::{severity_for, should_diagnose};
pub use reachability::reachable;
pub use scope_map::PrivateScopeMap;
