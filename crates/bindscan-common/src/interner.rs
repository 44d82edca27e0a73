//! String interner for identifier names.
//!
//! Binding names repeat heavily across a file (`i`, `err`, `props`, ...), so the
//! arena stores each distinct name once and hands out u32 `Atom`s. Comparing
//! two extracted names is then an integer comparison.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

const COMMON_BINDING_NAMES: &[&str] = &[
    "default", "exports", "module", "require", "args", "rest", "props", "state", "options",
    "config", "value", "key", "index", "item", "err", "error", "result", "data", "i", "e",
];

/// String interner that deduplicates strings and returns Atom handles.
///
/// # Example
/// ```
/// use bindscan_common::interner::Interner;
/// let mut interner = Interner::new();
/// let a1 = interner.intern("hello");
/// let a2 = interner.intern("hello");
/// assert_eq!(a1, a2);
/// assert_eq!(interner.resolve(a1), "hello");
/// ```
#[derive(Clone, Debug)]
pub struct Interner {
    map: FxHashMap<Arc<str>, Atom>,
    /// All interned strings; index 0 is the empty string.
    strings: Vec<Arc<str>>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        interner
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Look up a string without interning it.
    #[inline]
    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.map.get(s).copied()
    }

    /// Resolve an Atom back to its string value.
    /// Returns the empty string for atoms that did not come from this interner.
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.try_resolve(atom).unwrap_or("")
    }

    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.strings.get(atom.0 as usize).map(|s| s.as_ref())
    }

    /// Number of interned strings, including the reserved empty string.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }

    /// Pre-intern binding names that show up in almost every module.
    pub fn intern_common(&mut self) {
        for s in COMMON_BINDING_NAMES {
            self.intern(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_deduplicates() {
        let mut interner = Interner::new();
        let a = interner.intern("boop");
        let b = interner.intern("boop");
        let c = interner.intern("lol");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(c), "lol");
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_empty_string_is_none_atom() {
        let mut interner = Interner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.intern(""), Atom::NONE);
        assert!(Atom::NONE.is_none());
    }

    #[test]
    fn test_resolve_foreign_atom() {
        let interner = Interner::new();
        assert_eq!(interner.resolve(Atom(42)), "");
        assert_eq!(interner.try_resolve(Atom(42)), None);
        assert_eq!(interner.lookup("missing"), None);
    }

    #[test]
    fn test_intern_common_is_idempotent() {
        let mut interner = Interner::new();
        interner.intern_common();
        let len = interner.len();
        interner.intern_common();
        assert_eq!(interner.len(), len);
        assert!(interner.lookup("rest").is_some());
    }
}
