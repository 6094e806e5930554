//! Synthetic containers for declarations moved out of source files.
//!
//! Each source file gets at most one external container, created the first
//! time one of its declarations is moved. All files share a single builtins
//! container. Containers are ordinary [`IrFile`](jsb_ir::IrFile)s that are
//! not listed in their module, so codegen over the module's files never
//! sees them.

use jsb_ir::{FileId, FileOrigin, IrArena, ModuleId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::classify::file_is_foreign;

/// Package of the builtins container.
pub const BUILTINS_PACKAGE: &str = "kotlin";

/// Display name of the builtins container.
pub const BUILTINS_FILE_NAME: &str = "<bodiless built-ins>";

/// Get-or-create cache of synthetic containers, keyed by originating file.
#[derive(Debug, Default)]
pub struct ExternalContainers {
    by_file: FxHashMap<FileId, FileId>,
    builtins: Option<FileId>,
    package_level_js_modules: FxHashSet<FileId>,
}

impl ExternalContainers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The external container for `file`, created on first request.
    ///
    /// A new container copies the file's name, package and annotations. If
    /// the file is tagged with a JS module or qualifier, the container is
    /// also registered as needing module-level import wiring.
    pub fn get_or_create(&mut self, arena: &mut IrArena, file: FileId) -> FileId {
        if let Some(&container) = self.by_file.get(&file) {
            return container;
        }

        let source = arena.file(file);
        let (name, package, module) = (source.name.clone(), source.package.clone(), source.module);
        let annotations = source.annotations.clone();
        let foreign = file_is_foreign(arena, file);

        let container = arena.add_synthetic_file(
            module,
            name,
            package,
            annotations,
            FileOrigin::ExternalContainer { of: file },
        );
        self.by_file.insert(file, container);
        if foreign {
            self.package_level_js_modules.insert(container);
        }

        tracing::trace!(?file, ?container, foreign, "created external container");
        container
    }

    /// The single builtins container, created in `module` on first request.
    pub fn builtins(&mut self, arena: &mut IrArena, module: ModuleId) -> FileId {
        *self.builtins.get_or_insert_with(|| {
            let container = arena.add_synthetic_file(
                module,
                BUILTINS_FILE_NAME,
                BUILTINS_PACKAGE,
                Vec::new(),
                FileOrigin::BuiltIns,
            );
            tracing::trace!(?container, "created builtins container");
            container
        })
    }

    pub fn container_for(&self, file: FileId) -> Option<FileId> {
        self.by_file.get(&file).copied()
    }

    pub fn builtins_container(&self) -> Option<FileId> {
        self.builtins
    }

    pub fn package_level_js_modules(&self) -> &FxHashSet<FileId> {
        &self.package_level_js_modules
    }

    /// Every external container created so far, builtins excluded.
    pub fn containers(&self) -> impl Iterator<Item = (FileId, FileId)> + '_ {
        self.by_file.iter().map(|(&file, &container)| (file, container))
    }
}
