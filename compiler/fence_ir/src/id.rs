//! Arena ids.
//!
//! Every record in a `Program` is addressed by a 32-bit index into its
//! arena. Ids are only meaningful for the program that issued them.

/// Macro to define arena id types.
///
/// Each generated type has:
/// - a private `u32` payload
/// - `new()`, `index()`, `raw()` methods
/// - `Debug` implementation showing the id as `TypeName(n)`
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Index into the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )* };
}

define_id!(
    /// A module: the unit of `internal` visibility.
    ModuleId,
    /// A source file: the unit of `fileprivate` visibility.
    FileId,
    /// A nominal type's primary declaration.
    TypeId,
    /// An extension of a nominal type.
    ExtensionId,
    /// A declaration that may carry a scope attribute.
    DeclId,
    /// A single resolved reference to a declaration.
    UseId,
);
