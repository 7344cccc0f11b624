pub mod aligned;
pub mod line;

pub use line::{Classification, Rendered, RenderedLine, Segment};

/// Which side of a change a render shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Both sides: deleted text is shown as removed
    #[default]
    Full,
    /// Result-centric: deleted text is never shown
    Inline,
}
