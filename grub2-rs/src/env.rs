//! Script environment.
//!
//! An insertion-ordered list of name/value bindings.  Lookup scans from the
//! front and returns the first exact match, so when a name is bound more than
//! once the earliest binding shadows the later ones.

use tracing::trace;

/// One variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    name: String,
    value: String,
}

impl EnvEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered variable bindings owned by a [`Script`](crate::Script).
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<EnvEntry>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding.  An existing binding of the same name is not replaced
    /// and keeps precedence.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(EnvEntry::new(name, value));
    }

    /// Append an already-built entry.
    pub fn push_entry(&mut self, entry: EnvEntry) {
        self.entries.push(entry);
    }

    /// Value of the first binding whose name equals `name` exactly.
    ///
    /// Comparison is case-sensitive and length-exact: `FOO` does not satisfy
    /// a lookup for `FOOBAR` or `foo`.  `name` is usually a slice of the word
    /// being expanded.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let found = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(EnvEntry::value);
        trace!(var = name, found = found.is_some(), "env lookup");
        found
    }

    /// Returns `true` if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Environment
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, v)| EnvEntry::new(n, v)).collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
