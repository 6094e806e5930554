//! Files and modules.

use crate::{Annotation, DeclId, FileId, ModuleId, Name};

/// Where a file came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileOrigin {
    /// Produced by the front-end from a source file.
    Source,
    /// Synthetic container holding declarations moved out of `of`.
    ExternalContainer { of: FileId },
    /// Synthetic container holding bodiless builtins and intrinsics.
    BuiltIns,
}

/// A file: a named container of top-level declarations.
#[derive(Clone, Debug)]
pub struct IrFile {
    /// Path or display name.
    pub name: String,
    /// Dotted package name; empty for the root package.
    pub package: String,
    pub module: ModuleId,
    pub declarations: Vec<DeclId>,
    pub annotations: Vec<Annotation>,
    pub origin: FileOrigin,
}

impl IrFile {
    pub fn is_synthetic(&self) -> bool {
        self.origin != FileOrigin::Source
    }

    /// Find a file-level annotation by the fully-qualified name of its class.
    pub fn annotation(&self, class_fq_name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.class_fq_name == class_fq_name)
    }
}

/// A module: an ordered sequence of source files.
///
/// Synthetic containers belong to a module (`IrFile::module`) but are not
/// listed in `files`.
#[derive(Clone, Debug)]
pub struct IrModule {
    pub name: Name,
    pub files: Vec<FileId>,
}
