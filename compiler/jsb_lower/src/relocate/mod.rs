//! Moving bodiless declarations out of source files.
//!
//! For one file, the pass first validates externality consistency on the
//! file as the front-end produced it, then rebuilds the file's top-level
//! list:
//!
//! 1. Snapshot the top-level declarations and classify each one.
//! 2. Detach the list. Unmatched declarations go back in their original
//!    order; every other declaration is appended to its target container
//!    and reparented there, carrying its whole subtree.
//! 3. Each moved declaration and everything nested in it is recorded in
//!    the context's external-declarations index.
//!
//! Classification never depends on where other declarations live, so all
//! dispositions are computed before the first move.

use jsb_ir::{DeclId, FileId, IrArena, StringLookup};

use crate::classify::{DeclClassifier, Disposition};
use crate::validate::validate_is_external;
use crate::{JsLoweringContext, LowerError};

/// Per-file bodiless-declaration lowering.
pub struct MoveBodilessDeclarations<'a, I: StringLookup + ?Sized> {
    ctx: &'a mut JsLoweringContext,
    interner: &'a I,
}

impl<'a, I: StringLookup + ?Sized> MoveBodilessDeclarations<'a, I> {
    pub fn new(ctx: &'a mut JsLoweringContext, interner: &'a I) -> Self {
        Self { ctx, interner }
    }

    /// Validate `file`, then move its bodiless declarations into the
    /// synthetic containers.
    #[tracing::instrument(level = "trace", skip(self, arena))]
    pub fn lower(&mut self, arena: &mut IrArena, file: FileId) -> Result<(), LowerError> {
        validate_is_external(arena, self.interner, file)?;
        self.transform_flat(arena, file);
        Ok(())
    }

    fn transform_flat(&mut self, arena: &mut IrArena, file: FileId) {
        let plan: Vec<(DeclId, Disposition)> = {
            let classifier = DeclClassifier::for_file(arena, self.interner, file);
            arena
                .file(file)
                .declarations
                .iter()
                .map(|&decl| (decl, classifier.classify(decl)))
                .collect()
        };

        let module = arena.file(file).module;
        let mut kept = Vec::with_capacity(plan.len());
        let detached = arena.take_declarations(file);
        debug_assert_eq!(detached.len(), plan.len());

        for (decl, disposition) in plan {
            let target = match disposition {
                Disposition::Unmatched => {
                    kept.push(decl);
                    continue;
                }
                Disposition::RouteToBuiltins => self.ctx.containers.builtins(arena, module),
                Disposition::RouteToFileContainer { register_js_module } => {
                    if register_js_module {
                        self.ctx.register_declaration_js_module(decl);
                    }
                    self.ctx.containers.get_or_create(arena, file)
                }
            };

            arena.add_child(target, decl);
            self.ctx.collect_all_external_declarations(arena, decl);
            tracing::debug!(?decl, ?disposition, ?target, "moved bodiless declaration");
        }

        arena.replace_declarations(file, kept);
    }
}
