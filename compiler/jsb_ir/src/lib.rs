//! Typed declaration tree for the JS backend.
//!
//! This crate contains the data structures the IR lowering passes operate on:
//! - Interned names ([`Name`], [`StringInterner`])
//! - Declarations ([`Declaration`], [`DeclKind`]) with annotations and an
//!   externally-implemented flag
//! - Files and modules ([`IrFile`], [`IrModule`])
//! - The [`IrArena`] that owns all of them, plus tree queries
//!   (qualified names, annotation lookup, transitive externality)
//! - A [`visitor`] over structural children and a one-line [`render`]er
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes reference each other by `DeclId`/`FileId`,
//!   never by pointer, so reparenting is two index writes.
//! - **One parent**: every declaration appears in exactly one child list and
//!   its `parent` field names that list's owner. Arena methods keep both in
//!   step.

mod arena;
mod decl;
mod file;
mod ids;
mod interner;
mod name;
pub mod render;
pub mod visitor;

pub use arena::queries::{JS_MODULE_ANNOTATION, JS_QUALIFIER_ANNOTATION};
pub use arena::IrArena;
pub use decl::{Annotation, AnnotationArg, DeclKind, Declaration, OtherKind, Parent};
pub use file::{FileOrigin, IrFile, IrModule};
pub use ids::{DeclId, FileId, ModuleId};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use render::render_decl;
pub use visitor::DeclVisitor;
