//! Arena storage for the declaration tree.
//!
//! All declarations, files and modules of a compilation live in one
//! [`IrArena`] and reference each other by ID. Structural edits go through
//! arena methods so a declaration's `parent` and the child list it appears
//! in always change together.

pub(crate) mod queries;

use crate::{
    Annotation, DeclId, DeclKind, Declaration, FileId, FileOrigin, IrFile, IrModule, ModuleId,
    Name, OtherKind, Parent,
};

/// Owner of every node in the typed declaration tree.
#[derive(Clone, Debug, Default)]
pub struct IrArena {
    decls: Vec<Declaration>,
    files: Vec<IrFile>,
    modules: Vec<IrModule>,
}

fn next_id(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("IR arena exceeded u32::MAX entries"))
}

impl IrArena {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Modules and files ──────────────────────────────────────────

    pub fn add_module(&mut self, name: Name) -> ModuleId {
        let id = ModuleId::new(next_id(self.modules.len()));
        self.modules.push(IrModule {
            name,
            files: Vec::new(),
        });
        id
    }

    /// Add a source file and list it in its module.
    pub fn add_file(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> FileId {
        let id = self.push_file(IrFile {
            name: name.into(),
            package: package.into(),
            module,
            declarations: Vec::new(),
            annotations: Vec::new(),
            origin: FileOrigin::Source,
        });
        self.modules[module.index()].files.push(id);
        id
    }

    /// Add a synthetic file. It belongs to `module` but is not listed in
    /// the module's source files.
    pub fn add_synthetic_file(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        package: impl Into<String>,
        annotations: Vec<Annotation>,
        origin: FileOrigin,
    ) -> FileId {
        self.push_file(IrFile {
            name: name.into(),
            package: package.into(),
            module,
            declarations: Vec::new(),
            annotations,
            origin,
        })
    }

    fn push_file(&mut self, file: IrFile) -> FileId {
        let id = FileId::new(next_id(self.files.len()));
        self.files.push(file);
        id
    }

    pub fn add_file_annotation(&mut self, file: FileId, annotation: Annotation) {
        self.files[file.index()].annotations.push(annotation);
    }

    // ── Declarations ───────────────────────────────────────────────

    /// Allocate a declaration and list it in `parent`.
    ///
    /// A file parent lists it as a top-level declaration, a class parent as
    /// a member, a function parent as a value parameter.
    ///
    /// # Panics
    /// Panics if `parent` is a declaration that cannot own children of this
    /// kind. Property accessors and backing fields are attached with
    /// [`add_getter`](Self::add_getter) and friends.
    pub fn add_declaration(
        &mut self,
        parent: Parent,
        name: Option<Name>,
        kind: DeclKind,
    ) -> DeclId {
        let is_parameter = matches!(kind, DeclKind::Other(OtherKind::ValueParameter));
        let child_label = kind.label();
        let id = self.alloc(parent, name, kind);
        match parent {
            Parent::File(file) => self.files[file.index()].declarations.push(id),
            Parent::Decl(owner) => match &mut self.decls[owner.index()].kind {
                DeclKind::Class { members } => members.push(id),
                DeclKind::Function { value_parameters } if is_parameter => {
                    value_parameters.push(id);
                }
                other => panic!(
                    "{} cannot own {} as a child declaration",
                    other.label(),
                    child_label
                ),
            },
        }
        id
    }

    pub fn add_class(&mut self, parent: Parent, name: Name) -> DeclId {
        self.add_declaration(parent, Some(name), DeclKind::class())
    }

    pub fn add_function(&mut self, parent: Parent, name: Name) -> DeclId {
        self.add_declaration(parent, Some(name), DeclKind::function())
    }

    pub fn add_property(&mut self, parent: Parent, name: Name) -> DeclId {
        self.add_declaration(parent, Some(name), DeclKind::property())
    }

    pub fn add_field(&mut self, parent: Parent, name: Name) -> DeclId {
        self.add_declaration(parent, Some(name), DeclKind::Field)
    }

    pub fn add_value_parameter(&mut self, function: DeclId, name: Name) -> DeclId {
        self.add_declaration(
            Parent::Decl(function),
            Some(name),
            DeclKind::Other(OtherKind::ValueParameter),
        )
    }

    /// Attach a getter function to `property`, replacing any previous one.
    pub fn add_getter(&mut self, property: DeclId, name: Name) -> DeclId {
        self.add_property_part(property, name, DeclKind::function(), PropertySlot::Getter)
    }

    /// Attach a setter function to `property`, replacing any previous one.
    pub fn add_setter(&mut self, property: DeclId, name: Name) -> DeclId {
        self.add_property_part(property, name, DeclKind::function(), PropertySlot::Setter)
    }

    /// Attach a backing field to `property`, replacing any previous one.
    pub fn add_backing_field(&mut self, property: DeclId, name: Name) -> DeclId {
        self.add_property_part(property, name, DeclKind::Field, PropertySlot::BackingField)
    }

    fn add_property_part(
        &mut self,
        property: DeclId,
        name: Name,
        kind: DeclKind,
        slot: PropertySlot,
    ) -> DeclId {
        let id = self.alloc(Parent::Decl(property), Some(name), kind);
        match &mut self.decls[property.index()].kind {
            DeclKind::Property {
                getter,
                setter,
                backing_field,
            } => {
                let target = match slot {
                    PropertySlot::Getter => getter,
                    PropertySlot::Setter => setter,
                    PropertySlot::BackingField => backing_field,
                };
                *target = Some(id);
            }
            other => panic!("{} has no accessor slots", other.label()),
        }
        id
    }

    fn alloc(&mut self, parent: Parent, name: Option<Name>, kind: DeclKind) -> DeclId {
        let id = DeclId::new(next_id(self.decls.len()));
        self.decls.push(Declaration {
            name,
            kind,
            is_external: false,
            parent,
            annotations: Vec::new(),
        });
        id
    }

    pub fn set_external(&mut self, decl: DeclId, is_external: bool) {
        self.decls[decl.index()].is_external = is_external;
    }

    pub fn add_annotation(&mut self, decl: DeclId, annotation: Annotation) {
        self.decls[decl.index()].annotations.push(annotation);
    }

    // ── Moving declarations between files ──────────────────────────

    /// Append `decl` to `file` and make `file` its parent.
    ///
    /// The caller must already have removed `decl` from its previous child
    /// list (see [`take_declarations`](Self::take_declarations)).
    pub fn add_child(&mut self, file: FileId, decl: DeclId) {
        self.files[file.index()].declarations.push(decl);
        self.decls[decl.index()].parent = Parent::File(file);
    }

    /// Detach the whole top-level list of `file` for rebuilding.
    ///
    /// Every declaration taken must end up either back in `file` via
    /// [`replace_declarations`](Self::replace_declarations) or in another
    /// file via [`add_child`](Self::add_child).
    pub fn take_declarations(&mut self, file: FileId) -> Vec<DeclId> {
        std::mem::take(&mut self.files[file.index()].declarations)
    }

    /// Install a rebuilt top-level list. Each declaration's parent must
    /// already be `file`.
    pub fn replace_declarations(&mut self, file: FileId, declarations: Vec<DeclId>) {
        debug_assert!(
            declarations
                .iter()
                .all(|&d| self.decls[d.index()].parent == Parent::File(file)),
            "replace_declarations: declaration parented elsewhere"
        );
        self.files[file.index()].declarations = declarations;
    }

    // ── Access ─────────────────────────────────────────────────────

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    #[inline]
    pub fn file(&self, id: FileId) -> &IrFile {
        &self.files[id.index()]
    }

    #[inline]
    pub fn module(&self, id: ModuleId) -> &IrModule {
        &self.modules[id.index()]
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Clone, Copy)]
enum PropertySlot {
    Getter,
    Setter,
    BackingField,
}
