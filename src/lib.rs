//! Smart line-alignment diffing for editors.
//!
//! Compares an original text with a modified one and produces rows of
//! classified text segments, either in alignment order or synchronised with
//! the modified text's lines. Small inputs are aligned with a content-based
//! heuristic; large inputs fall back to a positional comparison. While the
//! modified text is being edited, [`SmartDiff::recompute`] redoes only the
//! precise work for the lines that changed.
//!
//! # Examples
//!
//! ```
//! use smart_line_diff::{Classification, RenderMode, SmartDiff};
//!
//! let diff = SmartDiff::new();
//! let rows = diff.compare("hello world", "hello wrld", RenderMode::Full);
//! assert_eq!(rows.len(), 1);
//! assert!(rows[0].contains(Classification::Removed));
//! ```

use error_set::error_set;
use log::debug;

pub mod align;
pub mod chars;
pub mod fast_path;
pub mod incremental;
pub mod lines;
pub mod parse;
pub mod region;
pub mod render;
pub mod similarity;

pub use align::{AlignmentPair, INSERTION_SORT_OFFSET, SIMILARITY_THRESHOLD};
pub use chars::{CharDiff, DiffOp, Fragments, SemanticCharDiff, OpKind};
pub use fast_path::FastPathThresholds;
pub use lines::LineRecord;
pub use parse::ParseError;
pub use region::ChangedRegion;
pub use render::{Classification, RenderMode, Rendered, RenderedLine, Segment};

error_set! {
    /// Top-level error for smart-line-diff operations
    SmartDiffError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("Replaying edits needs at least one snapshot")]
        NoSnapshots,
        ParseError(ParseError),
    }
}

/// Main interface for comparing texts
#[derive(Debug, Clone, Default)]
pub struct SmartDiff<D = SemanticCharDiff> {
    differ: D,
    thresholds: FastPathThresholds,
}

impl SmartDiff {
    /// Create a comparer using the default char diff and thresholds
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: CharDiff> SmartDiff<D> {
    /// Create a comparer around a custom char diff primitive
    pub fn with_differ(differ: D) -> Self {
        Self {
            differ,
            thresholds: FastPathThresholds::default(),
        }
    }

    /// Replace the fast path thresholds
    #[must_use]
    pub fn thresholds(mut self, thresholds: FastPathThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Compare two texts, one row per alignment pair.
    ///
    /// Always uses smart matching, whatever the input size.
    pub fn compare(&self, original: &str, modified: &str, mode: RenderMode) -> Rendered {
        let original_lines = lines::segment(original);
        let modified_lines = lines::segment(modified);
        let alignment = align::align(&original_lines, &modified_lines, &self.differ);
        debug!(
            "aligned {} original and {} modified lines into {} rows",
            original_lines.len(),
            modified_lines.len(),
            alignment.len()
        );
        render::aligned::render(&original_lines, &modified_lines, &alignment, &self.differ, mode)
    }

    /// Compare two texts, one row per modified line.
    ///
    /// # Examples
    ///
    /// ```
    /// use smart_line_diff::{RenderMode, RenderedLine, SmartDiff};
    ///
    /// let rows = SmartDiff::new().compare_for_editor("a\nb", "b\na\nc", RenderMode::Full);
    /// assert_eq!(rows[2], RenderedLine::added("c"));
    /// ```
    pub fn compare_for_editor(&self, original: &str, modified: &str, mode: RenderMode) -> Rendered {
        incremental::compare_for_editor(original, modified, &self.differ, &self.thresholds, mode)
    }

    /// Update an editor render after the modified text changed.
    ///
    /// Hands `previous` back unchanged when the edit changed no line.
    pub fn recompute(
        &self,
        original: &str,
        previous_modified: &str,
        current_modified: &str,
        previous: Rendered,
        mode: RenderMode,
    ) -> Rendered {
        incremental::recompute(
            original,
            previous_modified,
            current_modified,
            previous,
            &self.differ,
            &self.thresholds,
            mode,
        )
    }

    /// Text added and removed between two strings
    pub fn changed_fragments(&self, old: &str, new: &str) -> Fragments {
        chars::changed_fragments(old, new, &self.differ)
    }

    /// Render an editor session: the first snapshot is compared in full,
    /// every following one is recomputed from the one before.
    ///
    /// # Errors
    ///
    /// Returns [`SmartDiffError::NoSnapshots`] if `snapshots` is empty.
    pub fn replay<S: AsRef<str>>(
        &self,
        original: &str,
        snapshots: &[S],
        mode: RenderMode,
    ) -> Result<Rendered, SmartDiffError> {
        let (first, rest) = snapshots.split_first().ok_or(SmartDiffError::NoSnapshots)?;

        let mut previous_text = first.as_ref();
        let mut rendered = self.compare_for_editor(original, previous_text, mode);
        for snapshot in rest {
            let current = snapshot.as_ref();
            rendered = self.recompute(original, previous_text, current, rendered, mode);
            previous_text = current;
        }

        Ok(rendered)
    }
}
