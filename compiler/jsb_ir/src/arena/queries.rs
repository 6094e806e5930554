//! Read-only queries over the declaration tree: qualified names,
//! annotation lookup and transitive externality.

use crate::{DeclId, FileId, IrArena, Parent, StringLookup};

/// Annotation class binding a file or declaration to a JS module.
pub const JS_MODULE_ANNOTATION: &str = "kotlin.js.JsModule";

/// Annotation class binding a file to a qualifier inside its JS module.
pub const JS_QUALIFIER_ANNOTATION: &str = "kotlin.js.JsQualifier";

impl IrArena {
    /// The file `decl` is directly listed in, if it is a top-level declaration.
    pub fn parent_file(&self, decl: DeclId) -> Option<FileId> {
        match self.decl(decl).parent {
            Parent::File(file) => Some(file),
            Parent::Decl(_) => None,
        }
    }

    /// The file at the root of `decl`'s parent chain.
    pub fn containing_file(&self, decl: DeclId) -> FileId {
        let mut current = decl;
        loop {
            match self.decl(current).parent {
                Parent::File(file) => return file,
                Parent::Decl(owner) => current = owner,
            }
        }
    }

    /// Fully-qualified name: the file's package followed by the names of
    /// every enclosing declaration and `decl` itself.
    ///
    /// Returns `None` if `decl` or any enclosing declaration is anonymous.
    pub fn fq_name<I: StringLookup + ?Sized>(&self, interner: &I, decl: DeclId) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = decl;
        let package = loop {
            let node = self.decl(current);
            segments.push(interner.lookup(node.name?));
            match node.parent {
                Parent::Decl(owner) => current = owner,
                Parent::File(file) => break self.file(file).package.as_str(),
            }
        };

        let mut fq = String::from(package);
        for segment in segments.iter().rev() {
            if !fq.is_empty() {
                fq.push('.');
            }
            fq.push_str(segment);
        }
        Some(fq)
    }

    /// Whether `decl` is implemented outside this compilation: it is itself
    /// marked external, or some enclosing declaration is (a property for its
    /// accessors and backing field, a class for its members, a function for
    /// its parameters).
    pub fn is_effectively_external(&self, decl: DeclId) -> bool {
        let mut current = decl;
        loop {
            let node = self.decl(current);
            if node.possibly_external() == Some(true) {
                return true;
            }
            match node.parent {
                Parent::Decl(owner) => current = owner,
                Parent::File(_) => return false,
            }
        }
    }

    pub fn has_annotation(&self, decl: DeclId, class_fq_name: &str) -> bool {
        self.decl(decl).annotation(class_fq_name).is_some()
    }

    /// Module name from the declaration's own `@JsModule`.
    pub fn js_module(&self, decl: DeclId) -> Option<&str> {
        self.decl(decl)
            .annotation(JS_MODULE_ANNOTATION)
            .and_then(|a| a.first_str_arg())
    }

    /// Module name from a file-level `@file:JsModule`.
    pub fn file_js_module(&self, file: FileId) -> Option<&str> {
        self.file(file)
            .annotation(JS_MODULE_ANNOTATION)
            .and_then(|a| a.first_str_arg())
    }

    /// Qualifier from a file-level `@file:JsQualifier`.
    pub fn file_js_qualifier(&self, file: FileId) -> Option<&str> {
        self.file(file)
            .annotation(JS_QUALIFIER_ANNOTATION)
            .and_then(|a| a.first_str_arg())
    }
}
