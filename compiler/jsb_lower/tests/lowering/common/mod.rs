//! Tree builder shared by the lowering tests.

use jsb_ir::{
    Annotation, DeclId, FileId, IrArena, ModuleId, Parent, StringInterner, JS_MODULE_ANNOTATION,
};
use jsb_lower::{move_bodiless_declarations, JsLoweringContext, LowerError, JS_INTRINSIC};

pub struct Program {
    pub interner: StringInterner,
    pub arena: IrArena,
    pub module: ModuleId,
}

impl Program {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let mut arena = IrArena::new();
        let module = arena.add_module(interner.intern("app"));
        Self {
            interner,
            arena,
            module,
        }
    }

    pub fn file(&mut self, name: &str, package: &str) -> FileId {
        self.arena.add_file(self.module, name, package)
    }

    pub fn class(&mut self, parent: Parent, name: &str) -> DeclId {
        let name = self.interner.intern(name);
        self.arena.add_class(parent, name)
    }

    pub fn function(&mut self, parent: Parent, name: &str) -> DeclId {
        let name = self.interner.intern(name);
        self.arena.add_function(parent, name)
    }

    /// Property with getter, setter and backing field sharing `is_external`.
    pub fn property(&mut self, parent: Parent, name: &str, is_external: bool) -> [DeclId; 4] {
        let prop = self.arena.add_property(parent, self.interner.intern(name));
        let getter = self
            .arena
            .add_getter(prop, self.interner.intern(&format!("<get-{name}>")));
        let setter = self
            .arena
            .add_setter(prop, self.interner.intern(&format!("<set-{name}>")));
        let field = self.arena.add_backing_field(prop, self.interner.intern(name));
        let parts = [prop, getter, setter, field];
        for decl in parts {
            self.arena.set_external(decl, is_external);
        }
        parts
    }

    pub fn external(&mut self, decl: DeclId) -> DeclId {
        self.arena.set_external(decl, true);
        decl
    }

    pub fn intrinsic(&mut self, decl: DeclId) {
        self.arena.add_annotation(decl, Annotation::new(JS_INTRINSIC));
    }

    pub fn js_module(&mut self, decl: DeclId, module: &str) {
        self.arena
            .add_annotation(decl, Annotation::with_str(JS_MODULE_ANNOTATION, module));
    }

    pub fn file_js_module(&mut self, file: FileId, module: &str) {
        self.arena
            .add_file_annotation(file, Annotation::with_str(JS_MODULE_ANNOTATION, module));
    }

    pub fn lower(&mut self, ctx: &mut JsLoweringContext) -> Result<(), LowerError> {
        move_bodiless_declarations(ctx, &mut self.arena, &self.interner, self.module)
    }

    pub fn top_level(&self, file: FileId) -> &[DeclId] {
        &self.arena.file(file).declarations
    }
}
