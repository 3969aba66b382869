//! Whole-program checking.
//!
//! References are grouped by the file they occur in. Each file is one work
//! item with its own `ScopeChecker` and `DiagnosticAggregator`, so workers
//! share nothing mutable. Per-file outputs are merged in file order, which
//! makes the result independent of scheduling.

use fence_access::{
    AggregateOutput, CacheStats, DeclCounts, DiagnosticAggregator, PrivateScopeMap, ScopeChecker,
};
use fence_diagnostic::emitter::DiagnosticEmitter;
use fence_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use fence_ir::{DeclId, Program, UseId};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::CheckConfig;

/// Result of checking a compilation unit.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// Diagnostics sorted by primary location.
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
    pub note_count: usize,
    /// Errors rejected by the configured error limit.
    pub dropped_errors: usize,
    /// Memo table counters summed over all workers.
    pub cache: CacheStats,
    counts: FxHashMap<DeclId, DeclCounts>,
}

impl CheckOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0 || self.dropped_errors > 0
    }

    /// Firings and notes recorded against `decl`.
    pub fn counts_for(&self, decl: DeclId) -> DeclCounts {
        self.counts.get(&decl).copied().unwrap_or_default()
    }

    /// Emit every diagnostic followed by the summary line.
    pub fn emit(&self, emitter: &mut dyn DiagnosticEmitter) {
        emitter.emit_all(&self.diagnostics);
        emitter.emit_summary(self.error_count + self.dropped_errors, self.warning_count);
        emitter.flush();
    }
}

/// File paths indexed by `FileId`, for rendering locations.
pub fn file_paths(program: &Program) -> Vec<String> {
    program
        .files()
        .map(|(id, _)| program.file_path(id).to_string())
        .collect()
}

/// Output of one work item.
struct FileOutput {
    aggregate: AggregateOutput,
    cache: CacheStats,
}

/// Check every reference in `program`.
#[tracing::instrument(level = "debug", skip_all, fields(
    files = program.file_count(),
    uses = program.use_count(),
    parallel = config.parallel,
))]
pub fn check_program(program: &Program, config: &CheckConfig) -> CheckOutput {
    let scopes = PrivateScopeMap::build(program);
    let batches = uses_by_file(program);

    let outputs = if config.parallel && batches.len() > 1 {
        check_parallel(program, &scopes, &batches, config.memoize)
    } else {
        batches
            .iter()
            .map(|uses| check_file(program, &scopes, uses, config.memoize))
            .collect()
    };

    let mut merged = AggregateOutput {
        queue: DiagnosticQueue::with_config(DiagnosticConfig::with_error_limit(config.error_limit)),
        counts: FxHashMap::default(),
    };
    let mut cache = CacheStats::default();
    for output in outputs {
        merged.merge(output.aggregate);
        cache = cache.merged(output.cache);
    }

    let error_count = merged.queue.error_count();
    let warning_count = merged.queue.warning_count();
    let note_count = merged.queue.note_count();
    let dropped_errors = merged.queue.dropped_errors();

    tracing::debug!(
        errors = error_count,
        warnings = warning_count,
        notes = note_count,
        dropped = dropped_errors,
        cache_hits = cache.hits,
        cache_misses = cache.misses,
        "scope check finished"
    );

    CheckOutput {
        diagnostics: merged.queue.flush(),
        error_count,
        warning_count,
        note_count,
        dropped_errors,
        cache,
        counts: merged.counts,
    }
}

/// References grouped by file, in file order. Files without references
/// are skipped.
fn uses_by_file(program: &Program) -> Vec<Vec<UseId>> {
    let mut batches: Vec<Vec<UseId>> = vec![Vec::new(); program.file_count()];
    for (id, site) in program.uses() {
        batches[site.file.index()].push(id);
    }
    batches.retain(|uses| !uses.is_empty());
    batches
}

/// Check files in a scoped rayon pool.
///
/// `build_scoped` guarantees the pool is torn down before returning.
fn check_parallel(
    program: &Program,
    scopes: &PrivateScopeMap,
    batches: &[Vec<UseId>],
    memoize: bool,
) -> Vec<FileOutput> {
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                batches
                    .par_iter()
                    .map(|uses| check_file(program, scopes, uses, memoize))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), checking sequentially");
            batches
                .iter()
                .map(|uses| check_file(program, scopes, uses, memoize))
                .collect()
        })
}

#[tracing::instrument(level = "trace", skip_all, fields(uses = uses.len()))]
fn check_file(
    program: &Program,
    scopes: &PrivateScopeMap,
    uses: &[UseId],
    memoize: bool,
) -> FileOutput {
    let mut checker = ScopeChecker::new(program, scopes).with_memoization(memoize);
    let mut aggregator = DiagnosticAggregator::new(program);
    aggregator.record_all(checker.check_uses(uses.iter().copied()));

    FileOutput {
        aggregate: aggregator.finish(),
        cache: checker.cache_stats(),
    }
}
