//! Lowering session state.
//!
//! `JsLoweringContext` holds everything the bodiless-declaration lowering
//! produces for later passes: the synthetic containers, the index of
//! excluded declarations, and the JS module registrations consumed by
//! import wiring. One context is created per compilation and threaded by
//! reference through every operation, so independent compilations in one
//! process never share state.

use jsb_ir::{visitor, DeclId, DeclVisitor, FileId, IrArena};
use rustc_hash::FxHashSet;

use crate::registry::ExternalContainers;
use crate::stack::ensure_sufficient_stack;

/// Knobs for a lowering run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoweringOptions {
    /// Run [`verify_partition`](crate::verify_partition) after the module
    /// driver finishes. Defaults to on in debug builds.
    pub verify_output: bool,
}

impl Default for LoweringOptions {
    fn default() -> Self {
        Self {
            verify_output: cfg!(debug_assertions),
        }
    }
}

/// Session state for one compilation's bodiless-declaration lowering.
#[derive(Debug, Default)]
pub struct JsLoweringContext {
    pub options: LoweringOptions,
    pub(crate) containers: ExternalContainers,
    external_declarations: FxHashSet<DeclId>,
    declaration_level_js_modules: Vec<DeclId>,
}

impl JsLoweringContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoweringOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Every declaration excluded from normal codegen, nested ones included.
    pub fn external_declarations(&self) -> &FxHashSet<DeclId> {
        &self.external_declarations
    }

    /// Whether `decl` was excluded from normal codegen.
    pub fn is_external_declaration(&self, decl: DeclId) -> bool {
        self.external_declarations.contains(&decl)
    }

    /// The shared container for builtins and intrinsics, once created.
    pub fn builtins_container(&self) -> Option<FileId> {
        self.containers.builtins_container()
    }

    /// The synthetic container holding declarations moved out of `file`.
    pub fn external_container(&self, file: FileId) -> Option<FileId> {
        self.containers.container_for(file)
    }

    /// Synthetic containers created for files tagged `@file:JsModule` or
    /// `@file:JsQualifier`; each needs module-level import wiring.
    pub fn package_level_js_modules(&self) -> &FxHashSet<FileId> {
        self.containers.package_level_js_modules()
    }

    /// Moved declarations carrying their own `@JsModule`, in the order they
    /// were moved.
    pub fn declaration_level_js_modules(&self) -> &[DeclId] {
        &self.declaration_level_js_modules
    }

    pub(crate) fn register_declaration_js_module(&mut self, decl: DeclId) {
        self.declaration_level_js_modules.push(decl);
    }

    /// Record `decl` and every declaration nested in it as external.
    pub(crate) fn collect_all_external_declarations(&mut self, arena: &IrArena, decl: DeclId) {
        let mut collector = ExternalCollector {
            index: &mut self.external_declarations,
        };
        collector.visit_decl(arena, decl);
    }
}

struct ExternalCollector<'a> {
    index: &'a mut FxHashSet<DeclId>,
}

impl DeclVisitor for ExternalCollector<'_> {
    fn visit_decl(&mut self, arena: &IrArena, decl: DeclId) {
        self.index.insert(decl);
        ensure_sufficient_stack(|| visitor::walk_decl(self, arena, decl));
    }
}
