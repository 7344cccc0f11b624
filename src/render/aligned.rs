//! Rendering of a line alignment into classified rows.

use super::{Rendered, RenderedLine, RenderMode};
use crate::align::AlignmentPair;
use crate::chars::CharDiff;
use crate::lines::LineRecord;

/// Render an alignment in alignment order, one row per pair.
pub fn render(
    original: &[LineRecord<'_>],
    modified: &[LineRecord<'_>],
    alignment: &[AlignmentPair],
    differ: &impl CharDiff,
    mode: RenderMode,
) -> Rendered {
    alignment
        .iter()
        .map(|pair| {
            let original_line = pair.original_index.map_or("", |i| original[i].content);
            let modified_line = pair.modified_index.map_or("", |j| modified[j].content);
            render_pair(original_line, modified_line, pair.similarity, differ, mode)
        })
        .collect()
}

fn render_pair(
    original: &str,
    modified: &str,
    similarity: f64,
    differ: &impl CharDiff,
    mode: RenderMode,
) -> RenderedLine {
    let original_empty = original.trim().is_empty();
    let modified_empty = modified.trim().is_empty();

    match (original_empty, modified_empty) {
        (true, true) => RenderedLine::blank(),
        (true, false) => RenderedLine::added(modified),
        (false, true) => match mode {
            RenderMode::Full => RenderedLine::removed(original),
            RenderMode::Inline => RenderedLine::blank(),
        },
        (false, false) if similarity == 1.0 => RenderedLine::unchanged(original),
        (false, false) => RenderedLine::from_char_diff(differ.diff(original, modified), mode),
    }
}

/// Render an alignment into rows indexed by modified line position.
///
/// Row `i` always describes line `i` of the modified text, whatever order the
/// alignment matched lines in. Deleted original lines have no row.
pub fn project_to_modified(
    original: &[LineRecord<'_>],
    modified: &[LineRecord<'_>],
    alignment: &[AlignmentPair],
    differ: &impl CharDiff,
    mode: RenderMode,
) -> Rendered {
    let mut rows: Vec<Option<RenderedLine>> = (0..modified.len()).map(|_| None).collect();

    for pair in alignment {
        let Some(j) = pair.modified_index else {
            continue;
        };
        let modified_line = modified[j];
        let original_line = pair.original_index.map(|i| original[i]);

        let row = match original_line {
            _ if modified_line.trimmed_is_empty => RenderedLine::blank(),
            Some(line) if line.trimmed_is_empty => RenderedLine::added(modified_line.content),
            Some(_) if pair.similarity == 1.0 => RenderedLine::unchanged(modified_line.content),
            Some(line) => RenderedLine::from_char_diff(
                differ.diff(line.content, modified_line.content),
                mode,
            ),
            None => RenderedLine::added(modified_line.content),
        };
        rows[j] = Some(row);
    }

    rows.into_iter()
        .enumerate()
        .map(|(j, row)| row.unwrap_or_else(|| RenderedLine::added(modified[j].content)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use crate::chars::SemanticCharDiff;
    use crate::lines::segment;
    use crate::render::Classification;
    use similar_asserts::assert_eq;

    fn render_texts(original: &str, modified: &str, mode: RenderMode) -> Rendered {
        let original = segment(original);
        let modified = segment(modified);
        let alignment = align(&original, &modified, &SemanticCharDiff);
        render(&original, &modified, &alignment, &SemanticCharDiff, mode)
    }

    fn project_texts(original: &str, modified: &str, mode: RenderMode) -> Rendered {
        let original = segment(original);
        let modified = segment(modified);
        let alignment = align(&original, &modified, &SemanticCharDiff);
        project_to_modified(&original, &modified, &alignment, &SemanticCharDiff, mode)
    }

    fn classes(line: &RenderedLine) -> Vec<Classification> {
        line.segments.iter().map(|s| s.class).collect()
    }

    #[test]
    fn edited_line_full_mode() {
        let rows = render_texts("hello world", "hello wrld", RenderMode::Full);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            classes(&rows[0]),
            vec![
                Classification::Unchanged,
                Classification::Removed,
                Classification::Unchanged
            ]
        );
        assert_eq!(rows[0].segments[1].text, "o");
    }

    #[test]
    fn edited_line_inline_mode() {
        let rows = render_texts("hello world", "hello wrld", RenderMode::Inline);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            classes(&rows[0]),
            vec![Classification::Unchanged, Classification::Unchanged]
        );
        assert_eq!(rows[0].text(), "hello wrld");
    }

    #[test]
    fn deleted_line_full_mode_shows_removed() {
        let rows = render_texts("keep\ndrop me", "keep", RenderMode::Full);
        assert_eq!(
            rows,
            vec![RenderedLine::unchanged("keep"), RenderedLine::removed("drop me")]
        );
    }

    #[test]
    fn deleted_line_inline_mode_is_blank() {
        let rows = render_texts("keep\ndrop me", "keep", RenderMode::Inline);
        assert_eq!(rows, vec![RenderedLine::unchanged("keep"), RenderedLine::blank()]);
    }

    #[test]
    fn inserted_line_is_added_in_both_modes() {
        for mode in [RenderMode::Full, RenderMode::Inline] {
            let rows = render_texts("a", "a\nbrand new", mode);
            assert_eq!(
                rows,
                vec![RenderedLine::unchanged("a"), RenderedLine::added("brand new")]
            );
        }
    }

    #[test]
    fn blank_against_blank_is_blank() {
        let rows = render_texts("a\n", "a\n   ", RenderMode::Full);
        assert_eq!(
            rows,
            vec![
                RenderedLine::unchanged("a"),
                RenderedLine::blank(),
                RenderedLine::blank()
            ]
        );
    }

    #[test]
    fn projection_follows_modified_order() {
        let rows = project_texts("a\nb", "b\na", RenderMode::Full);
        assert_eq!(rows, vec![RenderedLine::unchanged("b"), RenderedLine::unchanged("a")]);
    }

    #[test]
    fn projection_drops_deleted_lines() {
        let rows = project_texts("one\ntwo\nthree", "one\nthree", RenderMode::Full);
        assert_eq!(
            rows,
            vec![RenderedLine::unchanged("one"), RenderedLine::unchanged("three")]
        );
    }

    #[test]
    fn projection_marks_insertions_added() {
        let rows = project_texts("one", "zzz\none", RenderMode::Inline);
        assert_eq!(rows, vec![RenderedLine::added("zzz"), RenderedLine::unchanged("one")]);
    }

    #[test]
    fn projection_blanks_emptied_lines() {
        let rows = project_texts("one\ntwo", "one\n", RenderMode::Full);
        assert_eq!(rows, vec![RenderedLine::unchanged("one"), RenderedLine::blank()]);
    }

    #[test]
    fn projection_fills_unclaimed_slots_as_added() {
        let original = segment("a");
        let modified = segment("a\nb");
        // Only the first modified line is covered
        let alignment = vec![AlignmentPair {
            original_index: Some(0),
            modified_index: Some(0),
            similarity: 1.0,
        }];
        let rows = project_to_modified(
            &original,
            &modified,
            &alignment,
            &SemanticCharDiff,
            RenderMode::Full,
        );
        assert_eq!(rows, vec![RenderedLine::unchanged("a"), RenderedLine::added("b")]);
    }
}
