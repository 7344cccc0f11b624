//! Editor-synchronised comparison and keystroke-by-keystroke recompute.
//!
//! Both entry points return one row per line of the modified text, so row
//! `i` of the display always lines up with row `i` of the editor.

use crate::align::align;
use crate::chars::CharDiff;
use crate::fast_path::{self, FastPathThresholds};
use crate::lines;
use crate::region::{self, ChangedRegion};
use crate::render::{Rendered, RenderedLine, RenderMode, aligned};
use log::debug;

/// Compare two texts with rows indexed by modified line position.
///
/// Small inputs are aligned with smart matching and the alignment is
/// projected back onto modified line order. Inputs over `thresholds` are
/// compared positionally.
pub fn compare_for_editor(
    original: &str,
    modified: &str,
    differ: &impl CharDiff,
    thresholds: &FastPathThresholds,
    mode: RenderMode,
) -> Rendered {
    if thresholds.should_use(original, modified) {
        debug!("input over fast path thresholds, comparing by position");
        return fast_path::compare_positional(original, modified);
    }

    let original_lines = lines::segment(original);
    let modified_lines = lines::segment(modified);
    let alignment = align(&original_lines, &modified_lines, differ);
    aligned::project_to_modified(&original_lines, &modified_lines, &alignment, differ, mode)
}

/// Recompute an editor render after the modified text changed.
///
/// `previous` is the render of `previous_modified` and is handed back
/// untouched when the edit changed no line. Otherwise rows inside the
/// changed region get a precise char diff against the original line at the
/// same index, and every other row gets the cheap positional classification.
pub fn recompute(
    original: &str,
    previous_modified: &str,
    current_modified: &str,
    previous: Rendered,
    differ: &impl CharDiff,
    thresholds: &FastPathThresholds,
    mode: RenderMode,
) -> Rendered {
    if previous_modified == current_modified {
        debug!("modified text unchanged, reusing previous render");
        return previous;
    }

    let region = region::detect(previous_modified, current_modified);
    if region.is_noop() {
        debug!("changed region holds no change, reusing previous render");
        return previous;
    }

    if thresholds.should_use(original, current_modified) {
        debug!("input over fast path thresholds, comparing by position");
        return fast_path::compare_positional(original, current_modified);
    }

    render_with_region(original, &region, differ, mode)
}

fn render_with_region(
    original: &str,
    region: &ChangedRegion<'_>,
    differ: &impl CharDiff,
    mode: RenderMode,
) -> Rendered {
    let original_lines = lines::split(original);

    region
        .new_lines
        .iter()
        .enumerate()
        .map(|(i, &modified_line)| {
            let original_line = original_lines.get(i).copied().unwrap_or("");
            if region.contains(i) {
                precise_line(original_line, modified_line, differ, mode)
            } else {
                fast_path::classify(original_line, modified_line)
            }
        })
        .collect()
}

fn precise_line(
    original: &str,
    modified: &str,
    differ: &impl CharDiff,
    mode: RenderMode,
) -> RenderedLine {
    if modified == original {
        RenderedLine::unchanged(modified)
    } else if original.is_empty() {
        RenderedLine::added(modified)
    } else if modified.is_empty() {
        RenderedLine::blank()
    } else {
        RenderedLine::from_char_diff(differ.diff(original, modified), mode)
    }
}
