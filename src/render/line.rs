use super::RenderMode;
use crate::chars::{DiffOp, OpKind};

/// How a piece of rendered text relates to the original
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Unchanged,
    Added,
    Removed,
}

impl From<OpKind> for Classification {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Equal => Classification::Unchanged,
            OpKind::Insert => Classification::Added,
            OpKind::Delete => Classification::Removed,
        }
    }
}

/// A run of text with a single classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub class: Classification,
}

/// One displayed row of a diff.
///
/// A blank row is a single unchanged segment with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
}

/// A full render, one entry per displayed row
pub type Rendered = Vec<RenderedLine>;

impl RenderedLine {
    fn single(text: impl Into<String>, class: Classification) -> Self {
        Self {
            segments: vec![Segment {
                text: text.into(),
                class,
            }],
        }
    }

    pub fn blank() -> Self {
        Self::single(String::new(), Classification::Unchanged)
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::single(text, Classification::Unchanged)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::single(text, Classification::Added)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::single(text, Classification::Removed)
    }

    /// Build a row from char-diff fragments.
    ///
    /// Inline mode drops deleted fragments, and falls back to a blank row if
    /// nothing visible is left.
    pub fn from_char_diff(ops: Vec<DiffOp>, mode: RenderMode) -> Self {
        let segments: Vec<Segment> = ops
            .into_iter()
            .filter(|op| !(mode == RenderMode::Inline && op.kind == OpKind::Delete))
            .map(|op| Segment {
                class: op.kind.into(),
                text: op.text,
            })
            .collect();

        let line = Self { segments };
        if mode == RenderMode::Inline && line.text().trim().is_empty() {
            return Self::blank();
        }
        line
    }

    /// Concatenated text of every segment
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    pub fn contains(&self, class: Classification) -> bool {
        self.segments.iter().any(|s| s.class == class)
    }
}
