//! The chain of values from the render root to the value being formatted.

use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::value::{Identity, Value};

/// Label of the root entry.
pub const ROOT_LABEL: &str = "root";

/// Outcome of [`GraphPath::push`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visit {
    /// The value is not on the path yet (or has no identity).
    First,
    /// The value is already being formatted further up: a cycle.
    Revisit,
}

#[derive(Debug)]
struct PathEntry {
    label: Box<str>,
    /// Keeps the value alive, and so its address unique, while on the path.
    value: Value,
    /// Whether this entry added the identity to the active set.
    owns_identity: bool,
}

/// Stack of `(label, value)` entries.
///
/// Identities on the stack are mirrored in a hash set, so the cycle check is
/// constant time and memory is bounded by the depth.
#[derive(Debug)]
pub struct GraphPath {
    entries: SmallVec<[PathEntry; 8]>,
    active: FxHashSet<Identity>,
}

impl GraphPath {
    /// A path holding just the root.
    pub fn new(root: &Value) -> Self {
        let mut path = GraphPath {
            entries: SmallVec::new(),
            active: FxHashSet::default(),
        };
        path.push(ROOT_LABEL, root);
        path
    }

    /// Push `value` and report whether it was already on the path. Every
    /// push must be matched by a [`pop`](Self::pop), cycles included.
    pub fn push(&mut self, label: &str, value: &Value) -> Visit {
        let owns_identity = value
            .identity()
            .is_none_or(|identity| self.active.insert(identity));
        let visit = if owns_identity {
            Visit::First
        } else {
            Visit::Revisit
        };
        self.entries.push(PathEntry {
            label: label.into(),
            value: value.clone(),
            owns_identity: owns_identity && value.identity().is_some(),
        });
        visit
    }

    pub fn pop(&mut self) {
        if let Some(entry) = self.entries.pop() {
            if entry.owns_identity {
                if let Some(identity) = entry.value.identity() {
                    self.active.remove(&identity);
                }
            }
        }
    }

    /// Number of entries, the root included.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, value: &Value) -> bool {
        value
            .identity()
            .is_some_and(|identity| self.active.contains(&identity))
    }

    /// The value at the top of the path.
    pub fn current(&self) -> Option<&Value> {
        self.entries.last().map(|entry| &entry.value)
    }
}

impl fmt::Display for GraphPath {
    /// Labels joined by `.`, e.g. `root.Orders.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(&entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
