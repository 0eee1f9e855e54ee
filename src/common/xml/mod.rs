//! XML text helpers.

mod escape;

pub use escape::{escape_attr, escape_text, resolve_entity, unescape_xml};
