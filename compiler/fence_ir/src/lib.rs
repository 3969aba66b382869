//! Fence IR - Program Model for Scope-Attribute Checking
//!
//! This crate contains the data the checker reads:
//! - Spans and locations for source positions
//! - Names for interned identifiers
//! - Arena ids (`ModuleId`, `FileId`, `TypeId`, `ExtensionId`, `DeclId`, `UseId`)
//! - The four-level access lattice
//! - Scope attributes (`deprecated` / `unavailable` with an optional qualifier)
//! - The `Program` arena and the `ProgramBuilder` that binds it
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings become `Name(u32)`
//! - **Index Everything**: declarations, types and extensions refer to each
//!   other through `u32` ids, never through references, so there are no
//!   ownership cycles between a type and its extensions
//! - **Immutable After Binding**: a finished `Program` is only read

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod access;
mod attr;
mod builder;
mod id;
mod interner;
mod name;
mod program;
mod span;

pub use access::AccessLevel;
pub use attr::{AttrKind, ScopeAttribute};
pub use builder::{BindError, ProgramBuilder};
pub use id::{DeclId, ExtensionId, FileId, ModuleId, TypeId, UseId};
pub use interner::StringInterner;
pub use name::Name;
pub use program::{
    DeclContext, Declaration, Extension, Module, Program, SourceFile, TypeDecl, UseSite,
};
pub use span::{Location, Span};
