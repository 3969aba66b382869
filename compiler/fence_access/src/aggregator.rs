//! Turning firings into diagnostics.
//!
//! Every firing becomes one use-site diagnostic. An `unavailable` firing
//! is followed by one "marked unavailable here" note at the declaration,
//! so a declaration referenced from three diagnosed sites carries three
//! notes. Per-declaration tallies are kept alongside the queue.

use fence_diagnostic::{
    deprecated_use, marked_unavailable_here, unavailable_use, DiagnosticConfig, DiagnosticQueue,
};
use fence_ir::{AttrKind, DeclId, Program};
use rustc_hash::FxHashMap;

use crate::Firing;

/// Firings and companion notes recorded against one declaration.
///
/// Tallies count decisions, not rendered output: a firing whose error is
/// dropped by the error limit is still counted.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct DeclCounts {
    pub firings: usize,
    pub notes: usize,
}

impl DeclCounts {
    #[must_use]
    pub fn merged(self, other: DeclCounts) -> DeclCounts {
        DeclCounts {
            firings: self.firings + other.firings,
            notes: self.notes + other.notes,
        }
    }
}

/// What an aggregator hands back: its queue and tallies.
#[derive(Clone, Debug, Default)]
pub struct AggregateOutput {
    pub queue: DiagnosticQueue,
    pub counts: FxHashMap<DeclId, DeclCounts>,
}

impl AggregateOutput {
    /// Fold another worker's output into this one.
    pub fn merge(&mut self, other: AggregateOutput) {
        self.queue.merge(other.queue);
        for (decl, counts) in other.counts {
            let entry = self.counts.entry(decl).or_default();
            *entry = entry.merged(counts);
        }
    }

    pub fn counts_for(&self, decl: DeclId) -> DeclCounts {
        self.counts.get(&decl).copied().unwrap_or_default()
    }
}

/// Collects diagnostics for a stream of firings.
pub struct DiagnosticAggregator<'p> {
    program: &'p Program,
    queue: DiagnosticQueue,
    counts: FxHashMap<DeclId, DeclCounts>,
}

impl<'p> DiagnosticAggregator<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_config(program, DiagnosticConfig::default())
    }

    pub fn with_config(program: &'p Program, config: DiagnosticConfig) -> Self {
        DiagnosticAggregator {
            program,
            queue: DiagnosticQueue::with_config(config),
            counts: FxHashMap::default(),
        }
    }

    /// Record one firing.
    pub fn record(&mut self, firing: Firing) {
        let program = self.program;
        let decl = program.decl(firing.decl);
        let name = program.name(decl.name);
        let use_location = program.use_site(firing.use_id).location();
        let message = decl
            .attr
            .and_then(|attr| attr.message)
            .map(|message| program.name(message));

        let mut diag = match firing.kind {
            AttrKind::Deprecated => deprecated_use(name, use_location, message)
                .with_secondary_label(decl.location(), "declared here"),
            AttrKind::Unavailable => unavailable_use(name, use_location, message),
        };
        if let Some(renamed) = decl.attr.and_then(|attr| attr.renamed) {
            let renamed = program.name(renamed);
            diag = diag.with_maybe_fix(format!("use '{renamed}' instead"), use_location, renamed);
        }

        let counts = self.counts.entry(firing.decl).or_default();
        counts.firings += 1;

        let accepted = self.queue.push(diag);
        if firing.kind == AttrKind::Unavailable {
            counts.notes += 1;
            if accepted {
                self.queue
                    .push(marked_unavailable_here(name, decl.location()));
            }
        }
    }

    pub fn record_all(&mut self, firings: impl IntoIterator<Item = Firing>) {
        for firing in firings {
            self.record(firing);
        }
    }

    pub fn firings_for(&self, decl: DeclId) -> usize {
        self.counts.get(&decl).map_or(0, |c| c.firings)
    }

    pub fn notes_for(&self, decl: DeclId) -> usize {
        self.counts.get(&decl).map_or(0, |c| c.notes)
    }

    pub fn finish(self) -> AggregateOutput {
        AggregateOutput {
            queue: self.queue,
            counts: self.counts,
        }
    }
}
