//! Declaration tree visitor.
//!
//! Default `visit_*` implementations call the `walk_*` functions, which
//! descend into structural children. Override `visit_decl` to act on every
//! declaration and call [`walk_decl`] to continue into its children.
//!
//! # Example
//!
//! ```text
//! struct CountFunctions {
//!     count: usize,
//! }
//!
//! impl DeclVisitor for CountFunctions {
//!     fn visit_decl(&mut self, arena: &IrArena, decl: DeclId) {
//!         if arena.decl(decl).is_function() {
//!             self.count += 1;
//!         }
//!         walk_decl(self, arena, decl);
//!     }
//! }
//! ```

use smallvec::SmallVec;

use crate::{DeclId, DeclKind, FileId, IrArena};

/// Declaration tree visitor. The tree is immutable during the walk.
pub trait DeclVisitor {
    fn visit_file(&mut self, arena: &IrArena, file: FileId) {
        walk_file(self, arena, file);
    }

    fn visit_decl(&mut self, arena: &IrArena, decl: DeclId) {
        walk_decl(self, arena, decl);
    }
}

pub fn walk_file<V: DeclVisitor + ?Sized>(visitor: &mut V, arena: &IrArena, file: FileId) {
    for &decl in &arena.file(file).declarations {
        visitor.visit_decl(arena, decl);
    }
}

pub fn walk_decl<V: DeclVisitor + ?Sized>(visitor: &mut V, arena: &IrArena, decl: DeclId) {
    for child in children(arena, decl) {
        visitor.visit_decl(arena, child);
    }
}

/// Structural children of `decl`, in order: class members; property getter,
/// setter and backing field; function value parameters.
pub fn children(arena: &IrArena, decl: DeclId) -> SmallVec<[DeclId; 8]> {
    match &arena.decl(decl).kind {
        DeclKind::Class { members } => members.iter().copied().collect(),
        DeclKind::Function { value_parameters } => value_parameters.iter().copied().collect(),
        DeclKind::Property {
            getter,
            setter,
            backing_field,
        } => [*getter, *setter, *backing_field].into_iter().flatten().collect(),
        DeclKind::Field | DeclKind::Other(_) => SmallVec::new(),
    }
}
