//! Post-lowering invariant checks.
//!
//! Walks the source files of one module plus the synthetic containers of
//! one context after the module driver has run, and asserts:
//! - Each declaration is listed in exactly one child list, and its
//!   `parent` names the owner of that list
//! - No source file of the module still lists an excluded declaration
//! - Every declaration in a synthetic container, nested ones included, is
//!   in the external-declarations index
//!
//! Files and containers owned by other modules or other contexts sharing
//! the arena are not visited.
//!
//! Violations are lowering bugs, so they panic with a descriptive message.
//! The module driver runs this when `LoweringOptions::verify_output` is set,
//! which is the default in debug builds only.

use jsb_ir::{visitor, DeclId, DeclVisitor, FileId, IrArena, ModuleId, Parent};
use rustc_hash::FxHashSet;

use crate::stack::ensure_sufficient_stack;
use crate::JsLoweringContext;

/// Assert the partition invariants for `module` after lowering.
pub fn verify_partition(ctx: &JsLoweringContext, arena: &IrArena, module: ModuleId) {
    let mut checker = PartitionChecker {
        ctx,
        seen: FxHashSet::default(),
        in_container: false,
    };

    for &file in &arena.module(module).files {
        checker.check_file(arena, file, false);
        verify_source_file(ctx, arena, file);
    }

    let containers = ctx
        .containers
        .containers()
        .map(|(_, container)| container)
        .chain(ctx.builtins_container());
    for container in containers {
        checker.check_file(arena, container, true);
    }
}

fn verify_source_file(ctx: &JsLoweringContext, arena: &IrArena, file: FileId) {
    for &decl in &arena.file(file).declarations {
        assert!(
            !ctx.is_external_declaration(decl),
            "{decl:?} is excluded from codegen but still listed in source {file:?}",
        );
    }
}

struct PartitionChecker<'a> {
    ctx: &'a JsLoweringContext,
    seen: FxHashSet<DeclId>,
    in_container: bool,
}

impl PartitionChecker<'_> {
    fn check_file(&mut self, arena: &IrArena, file: FileId, in_container: bool) {
        self.in_container = in_container;
        for &decl in &arena.file(file).declarations {
            assert_eq!(
                arena.decl(decl).parent,
                Parent::File(file),
                "{decl:?} is listed in {file:?} but parented elsewhere",
            );
        }
        self.visit_file(arena, file);
    }
}

impl DeclVisitor for PartitionChecker<'_> {
    fn visit_decl(&mut self, arena: &IrArena, decl: DeclId) {
        assert!(self.seen.insert(decl), "{decl:?} is listed in two parents");
        if self.in_container {
            assert!(
                self.ctx.is_external_declaration(decl),
                "{decl:?} was moved to a container but is missing from the external index",
            );
        }
        for child in visitor::children(arena, decl) {
            assert_eq!(
                arena.decl(child).parent,
                Parent::Decl(decl),
                "{child:?} is a child of {decl:?} but parented elsewhere",
            );
        }
        ensure_sufficient_stack(|| visitor::walk_decl(self, arena, decl));
    }
}
