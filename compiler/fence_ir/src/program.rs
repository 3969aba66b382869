//! The bound program arena.
//!
//! A `Program` holds every module, file, type, extension, declaration and
//! resolved reference of one compilation unit. Records refer to each other
//! through ids only. A `Program` is produced by `ProgramBuilder` and is
//! read-only afterwards, so it can be shared across checking workers.

use crate::{
    DeclId, ExtensionId, FileId, Location, ModuleId, Name, ScopeAttribute, Span, StringInterner,
    TypeId, UseId,
};

/// Lexical context of a declaration or a reference.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclContext {
    /// Not nested in any type (a free function, a global).
    #[default]
    TopLevel,
    /// Inside the primary declaration of a nominal type.
    Type(TypeId),
    /// Inside an extension of a nominal type.
    Extension(ExtensionId),
}

/// A module: the unit of `internal` visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub name: Name,
}

/// A source file. Every file belongs to exactly one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Name,
    pub module: ModuleId,
}

/// Primary declaration of a nominal type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: Name,
    pub file: FileId,
    pub module: ModuleId,
    pub span: Span,
}

/// An extension of a nominal type.
///
/// May live in a different file, or a different module, than the type
/// it extends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    pub extended: TypeId,
    pub file: FileId,
    pub module: ModuleId,
    pub span: Span,
}

/// A named entity that may carry a scope attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: Name,
    pub context: DeclContext,
    pub file: FileId,
    pub module: ModuleId,
    pub span: Span,
    /// At most one active scope attribute.
    pub attr: Option<ScopeAttribute>,
}

impl Declaration {
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.file, self.span)
    }
}

/// A single resolved reference to a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseSite {
    pub decl: DeclId,
    pub context: DeclContext,
    pub file: FileId,
    pub module: ModuleId,
    pub span: Span,
}

impl UseSite {
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.file, self.span)
    }
}

/// All bound records of a compilation unit.
#[derive(Debug, Default)]
pub struct Program {
    pub(crate) interner: StringInterner,
    pub(crate) modules: Vec<Module>,
    pub(crate) files: Vec<SourceFile>,
    pub(crate) types: Vec<TypeDecl>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) decls: Vec<Declaration>,
    pub(crate) uses: Vec<UseSite>,
}

/// Pair each arena slot with its id.
fn enumerate_ids<T, I>(items: &[T], make: fn(u32) -> I) -> impl Iterator<Item = (I, &T)> {
    items.iter().zip(0u32..).map(move |(item, raw)| (make(raw), item))
}

impl Program {
    /// Resolve an interned name.
    pub fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    pub fn type_decl(&self, id: TypeId) -> &TypeDecl {
        &self.types[id.index()]
    }

    pub fn extension(&self, id: ExtensionId) -> &Extension {
        &self.extensions[id.index()]
    }

    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    pub fn use_site(&self, id: UseId) -> &UseSite {
        &self.uses[id.index()]
    }

    /// Path of a file, for rendering.
    pub fn file_path(&self, id: FileId) -> &'static str {
        self.name(self.file(id).path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    pub fn use_count(&self) -> usize {
        self.uses.len()
    }

    pub fn files(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        enumerate_ids(&self.files, FileId::new)
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        enumerate_ids(&self.types, TypeId::new)
    }

    pub fn extensions(&self) -> impl Iterator<Item = (ExtensionId, &Extension)> {
        enumerate_ids(&self.extensions, ExtensionId::new)
    }

    pub fn decls(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        enumerate_ids(&self.decls, DeclId::new)
    }

    pub fn uses(&self) -> impl Iterator<Item = (UseId, &UseSite)> {
        enumerate_ids(&self.uses, UseId::new)
    }

    /// The nominal type a context is lexically nested in.
    ///
    /// Extensions resolve to the type they extend.
    pub fn enclosing_type(&self, context: DeclContext) -> Option<TypeId> {
        match context {
            DeclContext::TopLevel => None,
            DeclContext::Type(ty) => Some(ty),
            DeclContext::Extension(ext) => Some(self.extension(ext).extended),
        }
    }
}
