//! Private-scope equivalence classes.
//!
//! A `private` member is visible inside its type's primary declaration and
//! inside every extension of that type that sits in the same file. So the
//! private scope of a type is not one region but one region per file: the
//! type's declaration and its extensions in file `F` form one class, its
//! extensions in file `G` form another.
//!
//! `PrivateScopeMap` records, per type, the files that hold at least one
//! member of such a class. It is built once per compilation unit and only
//! read afterwards.

use fence_ir::{FileId, Program, TypeId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Files holding a type's declaration or extensions. Almost always one or two.
type FileSet = SmallVec<[FileId; 2]>;

/// Type identity to the files of its private-equivalence classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrivateScopeMap {
    files: FxHashMap<TypeId, FileSet>,
}

impl PrivateScopeMap {
    /// Build the map for every type and extension in `program`.
    #[tracing::instrument(level = "debug", skip_all, fields(
        types = program.type_count(),
        extensions = program.extension_count(),
    ))]
    pub fn build(program: &Program) -> Self {
        let mut files: FxHashMap<TypeId, FileSet> = FxHashMap::default();

        for (ty, decl) in program.types() {
            insert_unique(files.entry(ty).or_default(), decl.file);
        }

        for (_, ext) in program.extensions() {
            insert_unique(files.entry(ext.extended).or_default(), ext.file);
        }

        PrivateScopeMap { files }
    }

    /// Files where `ty` has a private-equivalence class.
    pub fn files(&self, ty: TypeId) -> &[FileId] {
        self.files.get(&ty).map(SmallVec::as_slice).unwrap_or_default()
    }

    /// Check whether `file` holds `ty`'s declaration or one of its extensions.
    pub fn has_scope_in(&self, ty: TypeId, file: FileId) -> bool {
        self.files(ty).contains(&file)
    }
}

fn insert_unique(set: &mut FileSet, file: FileId) {
    if !set.contains(&file) {
        set.push(file);
    }
}
