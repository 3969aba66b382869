//! Reachability under a hypothetical access level.

use fence_ir::AccessLevel;

use crate::{PrivateScopeMap, Site};

/// Would `use_site` see a symbol declared at `level` at `decl_site`?
///
/// - `Private`: both sites are nested in the same nominal type and lie in
///   the same file, and that file holds the type's declaration or one of
///   its extensions. A top-level use never qualifies.
/// - `FilePrivate`: same file.
/// - `Internal`: same module.
/// - `Public`: always.
pub fn reachable(
    level: AccessLevel,
    decl_site: &Site,
    use_site: &Site,
    scopes: &PrivateScopeMap,
) -> bool {
    match level {
        AccessLevel::Private => match (decl_site.enclosing_type, use_site.enclosing_type) {
            (Some(decl_ty), Some(use_ty)) => {
                decl_ty == use_ty
                    && decl_site.file == use_site.file
                    && scopes.has_scope_in(decl_ty, decl_site.file)
            }
            _ => false,
        },
        AccessLevel::FilePrivate => decl_site.file == use_site.file,
        AccessLevel::Internal => decl_site.module == use_site.module,
        AccessLevel::Public => true,
    }
}
