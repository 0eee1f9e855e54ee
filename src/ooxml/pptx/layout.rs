/// The slide layouts available to new presentations.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::fmt;

/// A slide layout of the built-in slide master.
///
/// Mirrors the first two layouts of the default PowerPoint template; a new
/// slide is created with the placeholders its layout defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Centered title with a subtitle underneath
    TitleSlide,
    /// Title with one body placeholder for bulleted text
    TitleAndContent,
}

impl LayoutKind {
    /// All layouts, in slide master order.
    pub const ALL: [LayoutKind; 2] = [LayoutKind::TitleSlide, LayoutKind::TitleAndContent];

    /// The layout name, as stored in the layout's `<p:cSld name="...">`.
    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::TitleSlide => "Title Slide",
            LayoutKind::TitleAndContent => "Title and Content",
        }
    }

    /// 1-based position in the slide master's layout list.
    pub fn index(self) -> u32 {
        match self {
            LayoutKind::TitleSlide => 1,
            LayoutKind::TitleAndContent => 2,
        }
    }

    pub fn partname(self) -> Result<PackURI> {
        PackURI::new(format!("/ppt/slideLayouts/slideLayout{}.xml", self.index()))
            .map_err(OpcError::InvalidPackUri)
    }

    #[inline]
    pub fn has_subtitle(self) -> bool {
        matches!(self, LayoutKind::TitleSlide)
    }

    #[inline]
    pub fn has_body(self) -> bool {
        matches!(self, LayoutKind::TitleAndContent)
    }

    /// The `type` attribute of the title placeholder on this layout.
    pub(crate) fn title_ph_type(self) -> &'static str {
        match self {
            LayoutKind::TitleSlide => "ctrTitle",
            LayoutKind::TitleAndContent => "title",
        }
    }

    /// Look a layout up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partnames() {
        assert_eq!(
            LayoutKind::TitleSlide.partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
        assert_eq!(
            LayoutKind::TitleAndContent.partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout2.xml"
        );
    }

    #[test]
    fn test_placeholders_by_layout() {
        assert!(LayoutKind::TitleSlide.has_subtitle());
        assert!(!LayoutKind::TitleSlide.has_body());
        assert!(LayoutKind::TitleAndContent.has_body());
        assert!(!LayoutKind::TitleAndContent.has_subtitle());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            LayoutKind::from_name("Title and Content"),
            Some(LayoutKind::TitleAndContent)
        );
        assert_eq!(LayoutKind::from_name("Blank"), None);
    }
}
