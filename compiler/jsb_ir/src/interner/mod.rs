//! String interner for declaration and package names.
//!
//! Interned strings are leaked to obtain `'static` lifetimes; the interner
//! lives for the whole compilation.

use std::sync::Arc;

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The interner exceeded `u32::MAX` strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct InternStore {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternStore {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// String interner with O(1) lookup and equality.
///
/// Interning takes `&self` so the interner can be borrowed alongside a
/// mutably borrowed [`IrArena`](crate::IrArena).
pub struct StringInterner {
    store: RwLock<InternStore>,
}

impl StringInterner {
    /// Create a new interner with the well-known package segments pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            store: RwLock::new(InternStore::with_empty()),
        };
        interner.pre_intern_segments();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(name) = self.get(s) {
            return Ok(name);
        }

        let mut guard = self.store.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for fallible interning.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Find an already-interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.store.read().map.get(s).map(|&index| Name::from_raw(index))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.store.read().strings[name.index()]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.store.read().strings.len()
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    fn pre_intern_segments(&self) {
        const SEGMENTS: &[&str] = &["kotlin", "js", "<init>", "<get>", "<set>", "<this>"];

        for segment in SEGMENTS {
            self.intern(segment);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets queries such as qualified-name computation and rendering accept any
/// name source without depending on `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared handle to one interner, for drivers that hand the interner to
/// several compilation phases.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}
