//! Site resolution.
//!
//! Resolves declarations and references to the three coordinates that
//! reachability needs: enclosing nominal type, file, and module.

use fence_ir::{DeclContext, DeclId, FileId, ModuleId, Program, TypeId, UseId};

/// A resolved source position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Site {
    /// The nominal type the position is nested in. Positions inside an
    /// extension resolve to the extended type.
    pub enclosing_type: Option<TypeId>,
    pub file: FileId,
    pub module: ModuleId,
}

/// Resolves ids of a bound `Program` to `Site`s.
///
/// Resolution never fails: every bound declaration and reference has a
/// file, a module, and a (possibly empty) enclosing type.
#[derive(Clone, Copy, Debug)]
pub struct SiteLocator<'p> {
    program: &'p Program,
}

impl<'p> SiteLocator<'p> {
    pub fn new(program: &'p Program) -> Self {
        SiteLocator { program }
    }

    /// Resolve a lexical context within `file`.
    pub fn resolve(&self, context: DeclContext, file: FileId) -> Site {
        Site {
            enclosing_type: self.program.enclosing_type(context),
            file,
            module: self.program.file(file).module,
        }
    }

    /// Site of a declaration.
    pub fn decl_site(&self, decl: DeclId) -> Site {
        let decl = self.program.decl(decl);
        self.resolve(decl.context, decl.file)
    }

    /// Site of a reference.
    pub fn use_site(&self, use_id: UseId) -> Site {
        let site = self.program.use_site(use_id);
        self.resolve(site.context, site.file)
    }
}
