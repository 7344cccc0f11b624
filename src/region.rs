use crate::lines;
use log::debug;

/// The line window in which two successive versions of a text differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedRegion<'a> {
    /// First line index that differs
    pub start_line: usize,
    /// Last line index that differs, inclusive
    pub end_line: usize,
    pub old_lines: Vec<&'a str>,
    pub new_lines: Vec<&'a str>,
}

impl ChangedRegion<'_> {
    pub fn contains(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    /// True when the region is a single line that is identical in both versions
    pub fn is_noop(&self) -> bool {
        self.start_line == self.end_line
            && matches!(
                (self.old_lines.get(self.start_line), self.new_lines.get(self.start_line)),
                (Some(old), Some(new)) if old == new
            )
    }
}

/// Find the line window holding every difference between two versions of
/// the same text.
///
/// The start is the first line that differs scanning forward. When both
/// versions have the same number of lines the end is the last line that
/// differs scanning backward, never before the start, and the window is the
/// tightest one. A change in line count widens the window to the end of the
/// longer text, since every line from the start onward has shifted.
pub fn detect<'a>(old_text: &'a str, new_text: &'a str) -> ChangedRegion<'a> {
    let old_lines = lines::split(old_text);
    let new_lines = lines::split(new_text);
    let common = old_lines.len().min(new_lines.len());
    let longest = old_lines.len().max(new_lines.len());

    let start_line = (0..common)
        .find(|&i| old_lines[i] != new_lines[i])
        .unwrap_or(common);

    let end_line = if old_lines.len() != new_lines.len() {
        longest - 1
    } else {
        (start_line..common)
            .rev()
            .find(|&i| old_lines[i] != new_lines[i])
            .unwrap_or(start_line)
    };

    debug!("changed region: lines {start_line}..={end_line}");

    ChangedRegion {
        start_line,
        end_line,
        old_lines,
        new_lines,
    }
}
