//! Disposition of top-level declarations.
//!
//! Rules, in precedence order (first match wins):
//!
//! 1. The owning file is tagged `@file:JsModule` or `@file:JsQualifier`:
//!    every top-level declaration moves to the file's external container.
//! 2. The declaration is a class named in [`BODILESS_BUILTIN_CLASSES`]:
//!    it moves to the builtins container.
//! 3. The declaration is a function directly in package [`JS_PACKAGE`]
//!    annotated with [`JS_INTRINSIC`]: it moves to the builtins container.
//! 4. The declaration is effectively external: it moves to the file's
//!    external container.
//!
//! Rules 2-4 only apply to named declarations. Nested declarations are never
//! classified on their own; they travel with their top-level declaration.

use jsb_ir::{DeclId, FileId, IrArena, StringLookup};

/// Classes with no body in the JS runtime, matched by exact qualified name.
pub const BODILESS_BUILTIN_CLASSES: [&str; 19] = [
    "kotlin.String",
    "kotlin.Nothing",
    "kotlin.Array",
    "kotlin.Any",
    "kotlin.ByteArray",
    "kotlin.CharArray",
    "kotlin.ShortArray",
    "kotlin.IntArray",
    "kotlin.LongArray",
    "kotlin.FloatArray",
    "kotlin.DoubleArray",
    "kotlin.BooleanArray",
    "kotlin.Boolean",
    "kotlin.Byte",
    "kotlin.Short",
    "kotlin.Int",
    "kotlin.Float",
    "kotlin.Double",
    "kotlin.Function",
];

/// Package whose annotated functions are compiler intrinsics.
pub const JS_PACKAGE: &str = "kotlin.js";

/// Marker annotation class for compiler intrinsics.
pub const JS_INTRINSIC: &str = "kotlin.js.JsIntrinsic";

/// Where a top-level declaration goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Stays in its file and is compiled normally.
    Unmatched,
    /// Moves to the originating file's external container.
    RouteToFileContainer {
        /// The declaration carries its own `@JsModule` and must be
        /// registered for declaration-level import wiring.
        register_js_module: bool,
    },
    /// Moves to the shared builtins container.
    RouteToBuiltins,
}

/// Whether `file` carries a file-level JS module or qualifier tag.
pub fn file_is_foreign(arena: &IrArena, file: FileId) -> bool {
    arena.file_js_module(file).is_some() || arena.file_js_qualifier(file).is_some()
}

/// Whether `decl` is a class whose qualified name is a bodiless builtin.
pub fn is_builtin_class<I: StringLookup + ?Sized>(
    arena: &IrArena,
    interner: &I,
    decl: DeclId,
) -> bool {
    arena.decl(decl).is_class()
        && arena
            .fq_name(interner, decl)
            .is_some_and(|fq| BODILESS_BUILTIN_CLASSES.contains(&fq.as_str()))
}

/// Whether `decl` is a function directly in [`JS_PACKAGE`] marked with
/// [`JS_INTRINSIC`].
pub fn is_intrinsic(arena: &IrArena, decl: DeclId) -> bool {
    arena.decl(decl).is_function()
        && arena
            .parent_file(decl)
            .is_some_and(|file| arena.file(file).package == JS_PACKAGE)
        && arena.has_annotation(decl, JS_INTRINSIC)
}

/// Classifier for the top-level declarations of one file.
///
/// The file-level tag is evaluated once, when the classifier is built.
pub struct DeclClassifier<'a, I: StringLookup + ?Sized> {
    arena: &'a IrArena,
    interner: &'a I,
    file: FileId,
    file_is_foreign: bool,
}

impl<'a, I: StringLookup + ?Sized> DeclClassifier<'a, I> {
    pub fn for_file(arena: &'a IrArena, interner: &'a I, file: FileId) -> Self {
        Self {
            arena,
            interner,
            file,
            file_is_foreign: file_is_foreign(arena, file),
        }
    }

    pub fn file_is_foreign(&self) -> bool {
        self.file_is_foreign
    }

    /// Classify `decl`. Anything not directly listed in this classifier's
    /// file is `Unmatched`.
    pub fn classify(&self, decl: DeclId) -> Disposition {
        if self.arena.parent_file(decl) != Some(self.file) {
            return Disposition::Unmatched;
        }

        if self.file_is_foreign {
            return self.route_to_file_container(decl);
        }

        if !self.arena.decl(decl).is_named() {
            return Disposition::Unmatched;
        }

        if is_builtin_class(self.arena, self.interner, decl) || is_intrinsic(self.arena, decl) {
            Disposition::RouteToBuiltins
        } else if self.arena.is_effectively_external(decl) {
            self.route_to_file_container(decl)
        } else {
            Disposition::Unmatched
        }
    }

    fn route_to_file_container(&self, decl: DeclId) -> Disposition {
        Disposition::RouteToFileContainer {
            register_js_module: self.arena.js_module(decl).is_some(),
        }
    }
}
