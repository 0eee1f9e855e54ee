//! Presentation template module.
//!
//! The fixed parts every new presentation carries: one slide master with its
//! two layouts, the theme, and the presentation-level property parts. They
//! are embedded at compile time from `resources/pptx`.

use crate::ooxml::pptx::layout::LayoutKind;

macro_rules! resource {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/pptx/", $name))
    };
}

/// The slide master, with title and body placeholders and text styles for
/// two outline levels.
pub fn default_slide_master_xml() -> &'static str {
    resource!("slideMaster1.xml")
}

/// The XML of the layout for `kind`.
pub fn slide_layout_xml(kind: LayoutKind) -> &'static str {
    match kind {
        LayoutKind::TitleSlide => resource!("slideLayout1.xml"),
        LayoutKind::TitleAndContent => resource!("slideLayout2.xml"),
    }
}

pub fn default_theme_xml() -> &'static str {
    resource!("theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    resource!("tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    resource!("viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    resource!("presProps.xml")
}
