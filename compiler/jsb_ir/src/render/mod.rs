//! One-line structural rendering of declarations for diagnostics.
//!
//! Produces text like `PROPERTY name:value external:true parent:CLASS name:Box`.
//! Source locations are not part of the tree and are not rendered.

use std::fmt::Write;

use crate::{DeclId, IrArena, Parent, StringLookup};

/// Render `decl` with its kind, name, external flag and parent.
pub fn render_decl<I: StringLookup + ?Sized>(arena: &IrArena, interner: &I, decl: DeclId) -> String {
    let mut out = render_head(arena, interner, decl);
    out.push_str(" parent:");
    match arena.decl(decl).parent {
        Parent::Decl(owner) => out.push_str(&render_head(arena, interner, owner)),
        Parent::File(file) => {
            let file = arena.file(file);
            let _ = write!(out, "FILE name:{}", file.name);
            if !file.package.is_empty() {
                let _ = write!(out, " package:{}", file.package);
            }
        }
    }
    out
}

fn render_head<I: StringLookup + ?Sized>(arena: &IrArena, interner: &I, decl: DeclId) -> String {
    let node = arena.decl(decl);
    let name = node.name.map_or("<anonymous>", |n| interner.lookup(n));
    let mut out = format!("{} name:{}", node.kind.label(), name);
    if let Some(is_external) = node.possibly_external() {
        let _ = write!(out, " external:{is_external}");
    }
    out
}
