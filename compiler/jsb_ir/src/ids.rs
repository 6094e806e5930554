//! Arena ID newtypes.
//!
//! Declarations, files and modules live in an [`IrArena`](crate::IrArena)
//! and are referenced by these 32-bit indices. IDs are allocated
//! sequentially starting from 0 and are never reused.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from a raw index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw `u32` value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Get the index as `usize` (for indexing into `Vec`s).
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(
    /// Declaration ID (class, function, property, field, parameter, ...).
    DeclId
);

define_id!(
    /// File ID. Source files and synthetic containers share this space.
    FileId
);

define_id!(
    /// Module ID.
    ModuleId
);
