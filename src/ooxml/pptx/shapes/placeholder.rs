/// Placeholder shapes as found on a slide.
use crate::ooxml::pptx::shapes::textframe::TextFrame;

/// A placeholder shape (`<p:sp>` carrying a `<p:ph>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placeholder {
    /// The `type` attribute of `<p:ph>`; `None` means a body/object placeholder
    pub ph_type: Option<String>,
    /// The `idx` attribute of `<p:ph>`; 0 when absent
    pub idx: u32,
    /// Shape name from `<p:cNvPr name="...">`
    pub name: String,
    pub text_frame: TextFrame,
}

impl Placeholder {
    /// Title placeholders are `title` or `ctrTitle`.
    pub fn is_title(&self) -> bool {
        matches!(self.ph_type.as_deref(), Some("title") | Some("ctrTitle"))
    }

    #[inline]
    pub fn is_subtitle(&self) -> bool {
        self.ph_type.as_deref() == Some("subTitle")
    }

    /// Body placeholders have no type, or the `body`/`obj` types.
    pub fn is_body(&self) -> bool {
        matches!(self.ph_type.as_deref(), None | Some("body") | Some("obj"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        let title = Placeholder {
            ph_type: Some("ctrTitle".into()),
            ..Default::default()
        };
        assert!(title.is_title());
        assert!(!title.is_body());

        let body = Placeholder {
            idx: 1,
            ..Default::default()
        };
        assert!(body.is_body());
        assert!(!body.is_subtitle());
    }
}
