//! Character-level diffing between two lines.
//!
//! The engine never diffs characters itself. It talks to a [`CharDiff`]
//! implementation, and ships [`SemanticCharDiff`] as the default: the
//! diff-match-patch port from the `dissimilar` crate, whose semantic cleanup
//! moves fragment boundaries onto word edges and folds away coincidental
//! single-character matches.

use dissimilar::Chunk;

/// Kind of a character-diff fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
}

/// One fragment of a character diff between two lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub kind: OpKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: OpKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Length of the fragment in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<Chunk<'_>> for DiffOp {
    fn from(chunk: Chunk<'_>) -> Self {
        match chunk {
            Chunk::Equal(text) => DiffOp::new(OpKind::Equal, text),
            Chunk::Insert(text) => DiffOp::new(OpKind::Insert, text),
            Chunk::Delete(text) => DiffOp::new(OpKind::Delete, text),
        }
    }
}

/// A character-level diff primitive.
///
/// Implementations return fragments in order such that concatenating the
/// `Equal` and `Delete` texts rebuilds `old`, and concatenating the `Equal`
/// and `Insert` texts rebuilds `new`.
pub trait CharDiff {
    fn diff(&self, old: &str, new: &str) -> Vec<DiffOp>;
}

impl<T: CharDiff + ?Sized> CharDiff for &T {
    fn diff(&self, old: &str, new: &str) -> Vec<DiffOp> {
        (**self).diff(old, new)
    }
}

/// Char diff with semantic cleanup, from `dissimilar`
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticCharDiff;

impl CharDiff for SemanticCharDiff {
    fn diff(&self, old: &str, new: &str) -> Vec<DiffOp> {
        dissimilar::diff(old, new)
            .into_iter()
            .map(DiffOp::from)
            .collect()
    }
}

/// Text that was added and removed between two strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

/// Collect the inserted and deleted fragments of a char diff, in order.
pub fn changed_fragments(old: &str, new: &str, differ: &impl CharDiff) -> Fragments {
    let mut fragments = Fragments::default();

    for op in differ.diff(old, new) {
        match op.kind {
            OpKind::Insert => fragments.added.push(op.text),
            OpKind::Delete => fragments.removed.push(op.text),
            OpKind::Equal => {}
        }
    }

    fragments
}
