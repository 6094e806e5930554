//! Shared builders for unit tests.

use jsb_ir::{
    Annotation, DeclId, FileId, IrArena, ModuleId, Parent, StringInterner, JS_MODULE_ANNOTATION,
    JS_QUALIFIER_ANNOTATION,
};

pub(crate) struct TestTree {
    pub(crate) interner: StringInterner,
    pub(crate) arena: IrArena,
    pub(crate) module: ModuleId,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        let interner = StringInterner::new();
        let mut arena = IrArena::new();
        let module = arena.add_module(interner.intern("main"));
        Self {
            interner,
            arena,
            module,
        }
    }

    pub(crate) fn file(&mut self, name: &str, package: &str) -> FileId {
        self.arena.add_file(self.module, name, package)
    }

    pub(crate) fn class(&mut self, parent: Parent, name: &str) -> DeclId {
        let name = self.interner.intern(name);
        self.arena.add_class(parent, name)
    }

    pub(crate) fn function(&mut self, parent: Parent, name: &str) -> DeclId {
        let name = self.interner.intern(name);
        self.arena.add_function(parent, name)
    }

    pub(crate) fn property(&mut self, parent: Parent, name: &str) -> DeclId {
        let name = self.interner.intern(name);
        self.arena.add_property(parent, name)
    }

    /// Property with getter and backing field, all sharing `is_external`.
    pub(crate) fn full_property(
        &mut self,
        parent: Parent,
        name: &str,
        is_external: bool,
    ) -> (DeclId, DeclId, DeclId) {
        let prop = self.property(parent, name);
        let getter = self.arena.add_getter(prop, self.interner.intern(&format!("<get-{name}>")));
        let field = self.arena.add_backing_field(prop, self.interner.intern(name));
        for decl in [prop, getter, field] {
            self.arena.set_external(decl, is_external);
        }
        (prop, getter, field)
    }

    pub(crate) fn external(&mut self, decl: DeclId) -> DeclId {
        self.arena.set_external(decl, true);
        decl
    }

    pub(crate) fn js_module(&mut self, decl: DeclId, module: &str) {
        self.arena
            .add_annotation(decl, Annotation::with_str(JS_MODULE_ANNOTATION, module));
    }

    pub(crate) fn file_js_module(&mut self, file: FileId, module: &str) {
        self.arena
            .add_file_annotation(file, Annotation::with_str(JS_MODULE_ANNOTATION, module));
    }

    pub(crate) fn file_js_qualifier(&mut self, file: FileId, qualifier: &str) {
        self.arena
            .add_file_annotation(file, Annotation::with_str(JS_QUALIFIER_ANNOTATION, qualifier));
    }
}
