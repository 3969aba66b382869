//! Fixture builder shared by the scope-attribute tests.

use fence_diagnostic::Diagnostic;
use fence_ir::{
    AccessLevel, AttrKind, DeclContext, DeclId, FileId, ModuleId, Program, ProgramBuilder,
    ScopeAttribute, Span, TypeId, UseId,
};
use fencec::verify::{verify, Expectation};
use fencec::{check_program, CheckConfig, CheckOutput};
use pretty_assertions::assert_eq;

/// Member name suffix and qualifier, in declaration order.
const MEMBERS: [(&str, Option<AccessLevel>); 5] = [
    ("EverywhereByDefault", None),
    ("EverywhereExplicitly", Some(AccessLevel::Private)),
    ("OutsideOfScope", Some(AccessLevel::FilePrivate)),
    ("OutsideOfFile", Some(AccessLevel::Internal)),
    ("OutsideOfModule", Some(AccessLevel::Public)),
];

/// Builds a program around `struct Foo` in `defs.fence` of module `App`.
pub struct Harness {
    builder: ProgramBuilder,
    kind: AttrKind,
    pub app: ModuleId,
    pub defs: FileId,
    pub foo: TypeId,
    members: [DeclId; 5],
    next_offset: u32,
}

impl Harness {
    pub fn new(kind: AttrKind) -> Self {
        let mut builder = ProgramBuilder::new();
        let app = builder.add_module("App").unwrap();
        let defs = builder.add_file(app, "defs.fence").unwrap();
        let foo = builder.add_type(defs, "Foo", Span::new(0, 3)).unwrap();

        let mut offset = 10;
        let members = MEMBERS.map(|(suffix, qualifier)| {
            let span = Span::new(offset, offset + 8);
            offset += 10;
            let attr = ScopeAttribute::new(kind, qualifier);
            builder
                .add_decl(
                    defs,
                    DeclContext::Type(foo),
                    &format!("{kind}{suffix}"),
                    span,
                    Some(attr),
                )
                .unwrap()
        });

        Harness {
            builder,
            kind,
            app,
            defs,
            foo,
            members,
            next_offset: 1000,
        }
    }

    pub fn add_module(&mut self, name: &str) -> ModuleId {
        self.builder.add_module(name).unwrap()
    }

    pub fn add_file(&mut self, module: ModuleId, path: &str) -> FileId {
        self.builder.add_file(module, path).unwrap()
    }

    /// Open an `extension Foo` in `file`.
    pub fn extend_foo(&mut self, file: FileId) -> DeclContext {
        let span = self.fresh_span();
        let ext = self.builder.add_extension(file, self.foo, span).unwrap();
        DeclContext::Extension(ext)
    }

    /// Reference all five members from `context` in `file`.
    pub fn reference_members(&mut self, file: FileId, context: DeclContext) -> [UseId; 5] {
        let members = self.members;
        members.map(|decl| {
            let span = self.fresh_span();
            self.builder.add_use(file, context, decl, span).unwrap()
        })
    }

    pub fn finish(self) -> Fixture {
        Fixture {
            program: self.builder.finish(),
            kind: self.kind,
            members: self.members,
            expectations: Vec::new(),
        }
    }

    fn fresh_span(&mut self) -> Span {
        let start = self.next_offset;
        self.next_offset += 20;
        Span::new(start, start + 12)
    }
}

/// A built program plus the diagnostics it is expected to produce.
pub struct Fixture {
    pub program: Program,
    kind: AttrKind,
    pub members: [DeclId; 5],
    expectations: Vec<Expectation>,
}

impl Fixture {
    /// Expect a diagnostic at each use whose flag is set.
    pub fn expect_uses(&mut self, uses: [UseId; 5], fires: [bool; 5]) {
        let substring = match self.kind {
            AttrKind::Deprecated => "is deprecated",
            AttrKind::Unavailable => "is unavailable",
        };
        for (use_id, fires) in uses.into_iter().zip(fires) {
            if fires {
                let location = self.program.use_site(use_id).location();
                self.expectations.push(match self.kind {
                    AttrKind::Deprecated => Expectation::warning(location, substring),
                    AttrKind::Unavailable => Expectation::error(location, substring),
                });
            }
        }
    }

    /// Expect `notes[i]` "marked unavailable here" notes at member `i`.
    pub fn expect_notes(&mut self, notes: [usize; 5]) {
        for (decl, count) in self.members.into_iter().zip(notes) {
            if count > 0 {
                let location = self.program.decl(decl).location();
                self.expectations
                    .push(Expectation::note(location, "marked unavailable here").times(count));
            }
        }
    }

    /// Check sequentially and in parallel, require identical output, and
    /// verify it against the recorded expectations.
    pub fn check(&self) -> CheckOutput {
        fencec::init_tracing();
        let sequential = check_program(&self.program, &CheckConfig::sequential());
        let parallel = check_program(&self.program, &CheckConfig::default());
        assert_eq!(parallel.diagnostics, sequential.diagnostics);
        assert_notes_follow_errors(&parallel.diagnostics);

        let report = verify(&parallel.diagnostics, &self.expectations);
        assert!(
            report.is_success(),
            "verification failed:\n{}",
            report.describe(&parallel.diagnostics, &self.expectations)
        );
        parallel
    }

    /// Check and compare the per-member note tallies.
    pub fn assert_note_tallies(&self, output: &CheckOutput, notes: [usize; 5]) {
        let actual = self.members.map(|decl| output.counts_for(decl).notes);
        assert_eq!(actual, notes);
    }
}

/// Every note sits directly after the error it belongs to, and both name
/// the same declaration.
pub fn assert_notes_follow_errors(diagnostics: &[Diagnostic]) {
    for (idx, note) in diagnostics.iter().enumerate().filter(|(_, d)| d.is_note()) {
        let error = idx
            .checked_sub(1)
            .map(|prev| &diagnostics[prev])
            .filter(|prev| prev.is_error());
        let Some(error) = error else {
            panic!("note at index {idx} does not follow an error: {note}");
        };
        let declared = &note.labels[0].message;
        let name = declared.trim_end_matches(" declared here");
        assert!(
            error.message.starts_with(name),
            "note at index {idx} ({declared}) follows an error about another declaration: {}",
            error.message
        );
    }
}
