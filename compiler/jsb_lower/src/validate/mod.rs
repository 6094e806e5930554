//! Externality consistency check.
//!
//! Within a top-level declaration's subtree, every declaration that can be
//! external must agree with the top-level declaration's flag: a property's
//! getter, setter and backing field, and every member of a class,
//! recursively. Declarations that cannot be external (parameters, type
//! aliases, initializers) are skipped; a top-level one counts as `false`.
//!
//! A mismatch means the front-end produced an inconsistent tree. It is
//! reported as [`LowerError::ExternalityConsistencyViolation`] and stops the
//! compilation.

use jsb_ir::{render_decl, DeclId, DeclKind, FileId, IrArena, StringLookup};

use crate::stack::ensure_sufficient_stack;
use crate::LowerError;

/// Check every top-level declaration of `file`.
pub fn validate_is_external<I: StringLookup + ?Sized>(
    arena: &IrArena,
    interner: &I,
    file: FileId,
) -> Result<(), LowerError> {
    for &decl in &arena.file(file).declarations {
        let is_external_top_level = arena.decl(decl).possibly_external().unwrap_or(false);
        validate_nested_external_declarations(arena, interner, decl, is_external_top_level)?;
    }
    Ok(())
}

/// Check `decl` and its structural subtree against `is_external_top_level`.
pub fn validate_nested_external_declarations<I: StringLookup + ?Sized>(
    arena: &IrArena,
    interner: &I,
    decl: DeclId,
    is_external_top_level: bool,
) -> Result<(), LowerError> {
    ensure_sufficient_stack(|| -> Result<(), LowerError> {
        tracing::trace!(?decl, is_external_top_level, "validating externality");
        check_external(arena, interner, decl, is_external_top_level)?;

        match &arena.decl(decl).kind {
            DeclKind::Property {
                getter,
                setter,
                backing_field,
            } => {
                for part in [getter, setter, backing_field].into_iter().flatten() {
                    check_external(arena, interner, *part, is_external_top_level)?;
                }
            }
            DeclKind::Class { members } => {
                for &member in members {
                    validate_nested_external_declarations(
                        arena,
                        interner,
                        member,
                        is_external_top_level,
                    )?;
                }
            }
            DeclKind::Function { .. } | DeclKind::Field | DeclKind::Other(_) => {}
        }
        Ok(())
    })
}

fn check_external<I: StringLookup + ?Sized>(
    arena: &IrArena,
    interner: &I,
    decl: DeclId,
    expected: bool,
) -> Result<(), LowerError> {
    match arena.decl(decl).possibly_external() {
        Some(found) if found != expected => Err(LowerError::ExternalityConsistencyViolation {
            decl,
            rendered: render_decl(arena, interner, decl),
            expected,
            found,
        }),
        _ => Ok(()),
    }
}
