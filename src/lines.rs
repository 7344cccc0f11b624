/// One line of a text blob, borrowed from the blob it was split out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// Raw line content without the `\n` separator
    pub content: &'a str,
    /// True when the line is empty or whitespace only
    pub trimmed_is_empty: bool,
    /// 0-based position of the line in its blob
    pub original_index: usize,
}

/// Split a text blob into line records on `\n`.
///
/// Carriage returns are left in place. An empty blob yields a single empty
/// record so that the line count matches editor line numbering.
pub fn segment(text: &str) -> Vec<LineRecord<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(original_index, content)| LineRecord {
            content,
            trimmed_is_empty: content.trim().is_empty(),
            original_index,
        })
        .collect()
}

/// Split a text blob into raw line slices, with the same rules as [`segment`].
pub(crate) fn split(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
