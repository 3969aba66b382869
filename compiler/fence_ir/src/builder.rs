//! Program binding.
//!
//! `ProgramBuilder` is the boundary where declarations and references
//! enter the model. It validates every id it is handed and derives each
//! record's module from its file, so a finished `Program` is internally
//! consistent and the checker never has to guard against bad input.

use crate::program::{Extension, Module, SourceFile, TypeDecl};
use crate::{
    DeclContext, DeclId, Declaration, ExtensionId, FileId, ModuleId, Name, Program,
    ScopeAttribute, Span, TypeId, UseId, UseSite,
};

/// A record could not be bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("unknown module {0:?}")]
    UnknownModule(ModuleId),
    #[error("unknown file {0:?}")]
    UnknownFile(FileId),
    #[error("unknown type {0:?}")]
    UnknownType(TypeId),
    #[error("unknown extension {0:?}")]
    UnknownExtension(ExtensionId),
    #[error("unknown declaration {0:?}")]
    UnknownDecl(DeclId),
    /// The lexical context named for an item is declared in another file.
    #[error("context {context:?} is declared in {context_file:?}, not in {file:?}")]
    ContextInOtherFile {
        context: DeclContext,
        context_file: FileId,
        file: FileId,
    },
    #[error("arena overflow: more than u32::MAX records")]
    ArenaOverflow,
}

/// Incrementally binds a `Program`.
///
/// # Example
///
/// ```
/// use fence_ir::{AccessLevel, DeclContext, ProgramBuilder, ScopeAttribute, Span};
///
/// let mut builder = ProgramBuilder::new();
/// let module = builder.add_module("App")?;
/// let file = builder.add_file(module, "main.fence")?;
/// let foo = builder.add_type(file, "Foo", Span::new(0, 3))?;
/// let decl = builder.add_decl(
///     file,
///     DeclContext::Type(foo),
///     "legacy",
///     Span::new(10, 16),
///     Some(ScopeAttribute::deprecated(Some(AccessLevel::Internal))),
/// )?;
/// builder.add_use(file, DeclContext::TopLevel, decl, Span::new(40, 46))?;
/// let program = builder.finish();
/// assert_eq!(program.uses().count(), 1);
/// # Ok::<(), fence_ir::BindError>(())
/// ```
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    program: Program,
}

/// Next id for an arena of the given length.
fn next_raw<T>(items: &[T]) -> Result<u32, BindError> {
    u32::try_from(items.len()).map_err(|_| BindError::ArenaOverflow)
}

impl ProgramBuilder {
    pub fn new() -> Self {
        ProgramBuilder {
            program: Program::default(),
        }
    }

    /// Intern a string in the program's interner.
    pub fn intern(&self, s: &str) -> Name {
        self.program.interner.intern(s)
    }

    pub fn add_module(&mut self, name: &str) -> Result<ModuleId, BindError> {
        let raw = next_raw(&self.program.modules)?;
        let name = self.intern(name);
        self.program.modules.push(Module { name });
        Ok(ModuleId::new(raw))
    }

    pub fn add_file(&mut self, module: ModuleId, path: &str) -> Result<FileId, BindError> {
        if module.index() >= self.program.modules.len() {
            return Err(BindError::UnknownModule(module));
        }
        let raw = next_raw(&self.program.files)?;
        let path = self.intern(path);
        self.program.files.push(SourceFile { path, module });
        Ok(FileId::new(raw))
    }

    /// Add the primary declaration of a nominal type.
    pub fn add_type(&mut self, file: FileId, name: &str, span: Span) -> Result<TypeId, BindError> {
        let module = self.module_of(file)?;
        let raw = next_raw(&self.program.types)?;
        let name = self.intern(name);
        self.program.types.push(TypeDecl {
            name,
            file,
            module,
            span,
        });
        Ok(TypeId::new(raw))
    }

    /// Add an extension of `extended` located in `file`.
    pub fn add_extension(
        &mut self,
        file: FileId,
        extended: TypeId,
        span: Span,
    ) -> Result<ExtensionId, BindError> {
        let module = self.module_of(file)?;
        if extended.index() >= self.program.types.len() {
            return Err(BindError::UnknownType(extended));
        }
        let raw = next_raw(&self.program.extensions)?;
        self.program.extensions.push(Extension {
            extended,
            file,
            module,
            span,
        });
        Ok(ExtensionId::new(raw))
    }

    /// Add a declaration, optionally carrying a scope attribute.
    pub fn add_decl(
        &mut self,
        file: FileId,
        context: DeclContext,
        name: &str,
        span: Span,
        attr: Option<ScopeAttribute>,
    ) -> Result<DeclId, BindError> {
        let module = self.module_of(file)?;
        self.check_context(context, file)?;
        let raw = next_raw(&self.program.decls)?;
        let name = self.intern(name);
        self.program.decls.push(Declaration {
            name,
            context,
            file,
            module,
            span,
            attr,
        });
        Ok(DeclId::new(raw))
    }

    /// Add a resolved reference to `decl`.
    pub fn add_use(
        &mut self,
        file: FileId,
        context: DeclContext,
        decl: DeclId,
        span: Span,
    ) -> Result<UseId, BindError> {
        let module = self.module_of(file)?;
        self.check_context(context, file)?;
        if decl.index() >= self.program.decls.len() {
            return Err(BindError::UnknownDecl(decl));
        }
        let raw = next_raw(&self.program.uses)?;
        self.program.uses.push(UseSite {
            decl,
            context,
            file,
            module,
            span,
        });
        Ok(UseId::new(raw))
    }

    /// Finish binding.
    pub fn finish(self) -> Program {
        self.program
    }

    fn module_of(&self, file: FileId) -> Result<ModuleId, BindError> {
        self.program
            .files
            .get(file.index())
            .map(|f| f.module)
            .ok_or(BindError::UnknownFile(file))
    }

    /// A context must be lexically inside the file that names it.
    fn check_context(&self, context: DeclContext, file: FileId) -> Result<(), BindError> {
        let context_file = match context {
            DeclContext::TopLevel => return Ok(()),
            DeclContext::Type(ty) => {
                self.program
                    .types
                    .get(ty.index())
                    .ok_or(BindError::UnknownType(ty))?
                    .file
            }
            DeclContext::Extension(ext) => {
                self.program
                    .extensions
                    .get(ext.index())
                    .ok_or(BindError::UnknownExtension(ext))?
                    .file
            }
        };
        if context_file == file {
            Ok(())
        } else {
            Err(BindError::ContextInOtherFile {
                context,
                context_file,
                file,
            })
        }
    }
}
