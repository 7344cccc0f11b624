//! Positional comparison for inputs too large for smart matching.
//!
//! Line `i` of the modified text is compared with line `i` of the original,
//! with no realignment and no char diffing. Any changed line is marked added
//! in full.

use crate::lines;
use crate::render::{Rendered, RenderedLine};

/// Line count above which the fast path is taken
pub const DEFAULT_MAX_LINES: usize = 50;
/// Combined char count of both texts above which the fast path is taken
pub const DEFAULT_MAX_CHARS: usize = 5000;
/// Average chars per line above which the fast path is taken
pub const DEFAULT_MAX_AVG_LINE_LENGTH: usize = 150;

/// Size limits past which comparisons fall back to the positional fast path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastPathThresholds {
    pub max_lines: usize,
    pub max_chars: usize,
    pub max_avg_line_length: usize,
}

impl Default for FastPathThresholds {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_chars: DEFAULT_MAX_CHARS,
            max_avg_line_length: DEFAULT_MAX_AVG_LINE_LENGTH,
        }
    }
}

impl FastPathThresholds {
    /// Whether comparing these two texts should skip smart matching.
    ///
    /// Lines are the larger of the two line counts, chars are summed over
    /// both texts.
    pub fn should_use(&self, original: &str, modified: &str) -> bool {
        let lines = lines::split(original).len().max(lines::split(modified).len());
        let chars = original.chars().count() + modified.chars().count();
        let avg_line_length = chars as f64 / lines as f64;

        lines > self.max_lines
            || chars > self.max_chars
            || avg_line_length > self.max_avg_line_length as f64
    }
}

/// Classify one modified line against the original line at the same index.
pub fn classify(original: &str, modified: &str) -> RenderedLine {
    if modified == original {
        RenderedLine::unchanged(modified)
    } else if original.is_empty() {
        RenderedLine::added(modified)
    } else if modified.is_empty() {
        RenderedLine::blank()
    } else {
        RenderedLine::added(modified)
    }
}

/// Compare two texts line by line by position, one row per modified line.
pub fn compare_positional(original: &str, modified: &str) -> Rendered {
    let original_lines = lines::split(original);

    lines::split(modified)
        .into_iter()
        .enumerate()
        .map(|(i, line)| classify(original_lines.get(i).copied().unwrap_or(""), line))
        .collect()
}
