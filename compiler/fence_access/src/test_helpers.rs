//! Shared test fixture for checker tests.
//!
//! Builds the layout every scenario runs against:
//!
//! ```text
//! module App
//!   defs.fence    struct Foo { .. }   extension Foo { .. }   top level
//!   other.fence   struct Bar { .. }   extension Foo { .. }   top level
//! module Client
//!   client.fence  extension Foo { .. }   top level
//! ```
//!
//! Only compiled in test builds.

#![expect(clippy::unwrap_used, reason = "Fixture construction cannot fail")]

use fence_ir::{
    DeclContext, DeclId, ExtensionId, FileId, ModuleId, Name, Program, ProgramBuilder,
    ScopeAttribute, Span, TypeId, UseId,
};

/// A lexical position in the fixture layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Spot {
    /// Inside `struct Foo` in `defs.fence`.
    InFoo,
    /// Inside `extension Foo` in `defs.fence`.
    InSameFileExtension,
    /// Top level of `defs.fence`.
    DefsTopLevel,
    /// Inside `struct Bar` in `other.fence`.
    InBar,
    /// Inside `extension Foo` in `other.fence`.
    InOtherFileExtension,
    /// Top level of `other.fence`.
    OtherTopLevel,
    /// Inside `extension Foo` in `client.fence` (module `Client`).
    InClientExtension,
    /// Top level of `client.fence`.
    ClientTopLevel,
}

impl Spot {
    pub(crate) const ALL: [Spot; 8] = [
        Spot::InFoo,
        Spot::InSameFileExtension,
        Spot::DefsTopLevel,
        Spot::InBar,
        Spot::InOtherFileExtension,
        Spot::OtherTopLevel,
        Spot::InClientExtension,
        Spot::ClientTopLevel,
    ];
}

/// Ids of the fixed fixture records.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Layout {
    pub(crate) app: ModuleId,
    pub(crate) client: ModuleId,
    pub(crate) defs: FileId,
    pub(crate) other: FileId,
    pub(crate) client_file: FileId,
    pub(crate) foo: TypeId,
    pub(crate) bar: TypeId,
    pub(crate) same_file_ext: ExtensionId,
    pub(crate) other_file_ext: ExtensionId,
    pub(crate) client_ext: ExtensionId,
}

impl Layout {
    pub(crate) fn place(&self, spot: Spot) -> (FileId, DeclContext) {
        match spot {
            Spot::InFoo => (self.defs, DeclContext::Type(self.foo)),
            Spot::InSameFileExtension => (self.defs, DeclContext::Extension(self.same_file_ext)),
            Spot::DefsTopLevel => (self.defs, DeclContext::TopLevel),
            Spot::InBar => (self.other, DeclContext::Type(self.bar)),
            Spot::InOtherFileExtension => {
                (self.other, DeclContext::Extension(self.other_file_ext))
            }
            Spot::OtherTopLevel => (self.other, DeclContext::TopLevel),
            Spot::InClientExtension => {
                (self.client_file, DeclContext::Extension(self.client_ext))
            }
            Spot::ClientTopLevel => (self.client_file, DeclContext::TopLevel),
        }
    }
}

pub(crate) struct World {
    builder: ProgramBuilder,
    pub(crate) layout: Layout,
    next_offset: u32,
}

impl World {
    pub(crate) fn new() -> Self {
        let mut builder = ProgramBuilder::new();
        let app = builder.add_module("App").unwrap();
        let client = builder.add_module("Client").unwrap();
        let defs = builder.add_file(app, "defs.fence").unwrap();
        let other = builder.add_file(app, "other.fence").unwrap();
        let client_file = builder.add_file(client, "client.fence").unwrap();
        let foo = builder.add_type(defs, "Foo", Span::new(0, 3)).unwrap();
        let bar = builder.add_type(other, "Bar", Span::new(0, 3)).unwrap();
        let same_file_ext = builder.add_extension(defs, foo, Span::new(500, 510)).unwrap();
        let other_file_ext = builder
            .add_extension(other, foo, Span::new(500, 510))
            .unwrap();
        let client_ext = builder
            .add_extension(client_file, foo, Span::new(500, 510))
            .unwrap();
        World {
            builder,
            layout: Layout {
                app,
                client,
                defs,
                other,
                client_file,
                foo,
                bar,
                same_file_ext,
                other_file_ext,
                client_ext,
            },
            next_offset: 1000,
        }
    }

    fn fresh_span(&mut self) -> Span {
        let start = self.next_offset;
        self.next_offset += 10;
        Span::new(start, start + 5)
    }

    pub(crate) fn decl(&mut self, spot: Spot, name: &str, attr: Option<ScopeAttribute>) -> DeclId {
        let (file, context) = self.layout.place(spot);
        let span = self.fresh_span();
        self.builder
            .add_decl(file, context, name, span, attr)
            .unwrap()
    }

    pub(crate) fn use_at(&mut self, spot: Spot, decl: DeclId) -> UseId {
        let (file, context) = self.layout.place(spot);
        let span = self.fresh_span();
        self.builder.add_use(file, context, decl, span).unwrap()
    }

    pub(crate) fn intern(&self, s: &str) -> Name {
        self.builder.intern(s)
    }

    pub(crate) fn finish(self) -> (Program, Layout) {
        (self.builder.finish(), self.layout)
    }
}
