//! Declaration nodes of the typed tree.

use smallvec::SmallVec;

use crate::{DeclId, FileId, Name};

/// The container a declaration is listed in.
///
/// Every declaration has exactly one parent, and appears in exactly one
/// child list: its file's top-level list, a class's member list, a
/// property's accessor/backing-field slots, or a function's parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    File(FileId),
    Decl(DeclId),
}

/// Kinds of declarations that never carry an externally-implemented flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherKind {
    ValueParameter,
    TypeAlias,
    AnonymousInitializer,
    EnumEntry,
}

impl OtherKind {
    /// Tag used by the structural renderer.
    pub fn label(self) -> &'static str {
        match self {
            OtherKind::ValueParameter => "VALUE_PARAMETER",
            OtherKind::TypeAlias => "TYPEALIAS",
            OtherKind::AnonymousInitializer => "ANONYMOUS_INITIALIZER",
            OtherKind::EnumEntry => "ENUM_ENTRY",
        }
    }
}

/// Kind-specific structure of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    /// Class, interface or object, with its members in declaration order.
    Class { members: Vec<DeclId> },
    /// Simple function or constructor.
    Function {
        value_parameters: SmallVec<[DeclId; 4]>,
    },
    /// Property with its optional accessors and backing field.
    Property {
        getter: Option<DeclId>,
        setter: Option<DeclId>,
        backing_field: Option<DeclId>,
    },
    /// Backing field or standalone field.
    Field,
    Other(OtherKind),
}

impl DeclKind {
    pub fn class() -> Self {
        DeclKind::Class {
            members: Vec::new(),
        }
    }

    pub fn function() -> Self {
        DeclKind::Function {
            value_parameters: SmallVec::new(),
        }
    }

    pub fn property() -> Self {
        DeclKind::Property {
            getter: None,
            setter: None,
            backing_field: None,
        }
    }

    /// Tag used by the structural renderer.
    pub fn label(&self) -> &'static str {
        match self {
            DeclKind::Class { .. } => "CLASS",
            DeclKind::Function { .. } => "FUN",
            DeclKind::Property { .. } => "PROPERTY",
            DeclKind::Field => "FIELD",
            DeclKind::Other(other) => other.label(),
        }
    }
}

/// Constant argument of an annotation constructor call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationArg {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// A resolved annotation: the class its constructor belongs to, plus the
/// constant arguments it was called with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Fully-qualified name of the constructed annotation class.
    pub class_fq_name: String,
    pub args: Vec<AnnotationArg>,
}

impl Annotation {
    pub fn new(class_fq_name: impl Into<String>) -> Self {
        Self {
            class_fq_name: class_fq_name.into(),
            args: Vec::new(),
        }
    }

    /// Annotation with a single string argument, e.g. `@JsModule("fs")`.
    pub fn with_str(class_fq_name: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            class_fq_name: class_fq_name.into(),
            args: vec![AnnotationArg::Str(arg.into())],
        }
    }

    /// First argument, if it is a string constant.
    pub fn first_str_arg(&self) -> Option<&str> {
        match self.args.first() {
            Some(AnnotationArg::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// A declaration in the typed tree.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// Identity name; `None` for anonymous declarations.
    pub name: Option<Name>,
    pub kind: DeclKind,
    /// Externally-implemented flag. Only meaningful for kinds that can be
    /// external; see [`Declaration::possibly_external`].
    pub is_external: bool,
    pub parent: Parent,
    pub annotations: Vec<Annotation>,
}

impl Declaration {
    /// The externally-implemented flag, or `None` for kinds that cannot be
    /// external (parameters, type aliases, initializers, enum entries).
    pub fn possibly_external(&self) -> Option<bool> {
        match self.kind {
            DeclKind::Class { .. }
            | DeclKind::Function { .. }
            | DeclKind::Property { .. }
            | DeclKind::Field => Some(self.is_external),
            DeclKind::Other(_) => None,
        }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, DeclKind::Class { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclKind::Function { .. })
    }

    /// Find an annotation by the fully-qualified name of its class.
    pub fn annotation(&self, class_fq_name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.class_fq_name == class_fq_name)
    }
}
