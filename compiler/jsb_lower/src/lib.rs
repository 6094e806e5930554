//! Bodiless declaration lowering for the JS backend.
//!
//! Some declarations have no body to compile: builtin classes the runtime
//! provides, compiler intrinsics, and declarations implemented in external
//! JS modules. This crate moves them out of the module's source files into
//! synthetic containers so later passes never treat them as ordinary code.
//!
//! # Pipeline Position
//!
//! ```text
//! Front-end → **Move Bodiless Declarations** → JS lowerings → codegen / import wiring
//! ```
//!
//! # What Happens Per File
//!
//! 1. **Validation** (`validate`): the externally-implemented flag must be
//!    uniform inside each top-level declaration's subtree. A mismatch is a
//!    fatal [`LowerError`].
//! 2. **Classification** (`classify`): each top-level declaration gets a
//!    [`Disposition`]. A file-level `@JsModule`/`@JsQualifier` wins over the
//!    builtin, intrinsic and externality rules.
//! 3. **Relocation** (`relocate`): moved declarations are reparented into
//!    the builtins container or the file's external container
//!    (`registry`), and indexed with their whole subtree.
//!
//! Results live in the [`JsLoweringContext`]: the containers, the index of
//! excluded declarations, and the JS module registrations.

mod classify;
mod context;
mod error;
mod registry;
mod relocate;
mod stack;
mod validate;
mod verify;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

use jsb_ir::{IrArena, ModuleId, StringLookup};

pub use classify::{
    file_is_foreign, is_builtin_class, is_intrinsic, DeclClassifier, Disposition,
    BODILESS_BUILTIN_CLASSES, JS_INTRINSIC, JS_PACKAGE,
};
pub use context::{JsLoweringContext, LoweringOptions};
pub use error::LowerError;
pub use registry::{ExternalContainers, BUILTINS_FILE_NAME, BUILTINS_PACKAGE};
pub use relocate::MoveBodilessDeclarations;
pub use validate::{validate_is_external, validate_nested_external_declarations};
pub use verify::verify_partition;

/// Lower every source file of `module`, in order.
///
/// Each file is validated and then lowered before the next file is looked
/// at. On a validation error the run stops; files lowered before the
/// failing one stay lowered.
pub fn move_bodiless_declarations<I: StringLookup + ?Sized>(
    ctx: &mut JsLoweringContext,
    arena: &mut IrArena,
    interner: &I,
    module: ModuleId,
) -> Result<(), LowerError> {
    let files = arena.module(module).files.clone();
    {
        let mut lowering = MoveBodilessDeclarations::new(ctx, interner);
        for file in files {
            lowering.lower(arena, file)?;
        }
    }

    if ctx.options.verify_output {
        verify_partition(ctx, arena, module);
    }

    tracing::debug!(
        excluded = ctx.external_declarations().len(),
        containers = ctx.containers.containers().count(),
        "moved bodiless declarations"
    );
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for lowering diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=jsb_lower=debug`
/// for relocations or `RUST_LOG=jsb_lower=trace` to also see validator
/// visits and container creation. Only the first call has an effect. A
/// subscriber already installed by the host compiler is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init()
            .is_ok();
        tracing::debug!(installed, "lowering tracing initialized");
    });
}
