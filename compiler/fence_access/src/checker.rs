//! Per-reference scope-attribute checking.
//!
//! `ScopeChecker` walks bound references, resolves both endpoints, and
//! applies [`should_diagnose`]. One checker belongs to one worker; the
//! memo table is never shared.

use fence_diagnostic::Severity;
use fence_ir::{AttrKind, DeclId, Program, UseId};
use rustc_hash::FxHashMap;

use crate::{should_diagnose, PrivateScopeMap, Site, SiteLocator};

/// A reference that must be diagnosed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Firing {
    pub use_id: UseId,
    pub decl: DeclId,
    pub kind: AttrKind,
    pub severity: Severity,
}

/// Memo table counters.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    #[must_use]
    pub fn merged(self, other: CacheStats) -> CacheStats {
        CacheStats {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
        }
    }
}

pub struct ScopeChecker<'p> {
    program: &'p Program,
    locator: SiteLocator<'p>,
    scopes: &'p PrivateScopeMap,
    /// Keyed by declaration and resolved use site. The declaration fixes
    /// both the attribute and the declaration site.
    cache: FxHashMap<(DeclId, Site), Option<Severity>>,
    memoize: bool,
    stats: CacheStats,
}

impl<'p> ScopeChecker<'p> {
    pub fn new(program: &'p Program, scopes: &'p PrivateScopeMap) -> Self {
        ScopeChecker {
            program,
            locator: SiteLocator::new(program),
            scopes,
            cache: FxHashMap::default(),
            memoize: true,
            stats: CacheStats::default(),
        }
    }

    /// Enable or disable memoization. Results are identical either way.
    #[must_use]
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Check one reference.
    ///
    /// References to declarations without a scope attribute are never
    /// evaluated and yield `None`.
    pub fn check_use(&mut self, use_id: UseId) -> Option<Firing> {
        let use_site = self.program.use_site(use_id);
        let decl = use_site.decl;
        let attr = self.program.decl(decl).attr?;
        let site = self.locator.resolve(use_site.context, use_site.file);

        let outcome = if self.memoize {
            if let Some(&cached) = self.cache.get(&(decl, site)) {
                self.stats.hits += 1;
                cached
            } else {
                self.stats.misses += 1;
                let result = self.evaluate(decl, &site);
                self.cache.insert((decl, site), result);
                result
            }
        } else {
            self.evaluate(decl, &site)
        };
        let severity = outcome?;

        tracing::trace!(
            use_id = ?use_id,
            decl = ?decl,
            kind = %attr.kind,
            severity = %severity,
            "scope attribute fired"
        );

        Some(Firing {
            use_id,
            decl,
            kind: attr.kind,
            severity,
        })
    }

    /// Check a batch of references, keeping only the firings.
    pub fn check_uses(&mut self, uses: impl IntoIterator<Item = UseId>) -> Vec<Firing> {
        uses.into_iter()
            .filter_map(|use_id| self.check_use(use_id))
            .collect()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    fn evaluate(&self, decl: DeclId, use_site: &Site) -> Option<Severity> {
        let attr = self.program.decl(decl).attr.as_ref()?;
        let decl_site = self.locator.decl_site(decl);
        should_diagnose(attr, &decl_site, use_site, self.scopes)
    }
}
