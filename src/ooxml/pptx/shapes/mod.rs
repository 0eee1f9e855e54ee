/// Shapes module for PowerPoint presentations.
///
/// Only placeholder shapes with text are modelled: titles, subtitles and
/// bulleted bodies.
pub mod placeholder;
pub mod textframe;

pub use placeholder::Placeholder;
pub use textframe::{MAX_LEVEL, Paragraph, TextFrame};
