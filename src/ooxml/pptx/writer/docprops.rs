/// Document property parts: `docProps/core.xml` and `docProps/app.xml`.
use crate::common::xml::escape_text;
use chrono::{DateTime, Utc};

/// W3CDTF as required by `dcterms:W3CDTF`.
const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Core properties written with every presentation.
#[derive(Debug, Clone)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub creator: String,
    pub created: DateTime<Utc>,
}

impl CoreProperties {
    pub fn to_xml(&self) -> String {
        let created = self.created.format(W3CDTF).to_string();
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#);
        xml.push_str(r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#);
        xml.push_str(r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_text(title));
            xml.push_str("</dc:title>");
        }
        xml.push_str("<dc:creator>");
        xml.push_str(&escape_text(&self.creator));
        xml.push_str("</dc:creator>");
        xml.push_str("<cp:lastModifiedBy>");
        xml.push_str(&escape_text(&self.creator));
        xml.push_str("</cp:lastModifiedBy>");
        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&created);
        xml.push_str("</dcterms:created>");
        xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
        xml.push_str(&created);
        xml.push_str("</dcterms:modified>");

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties.
#[derive(Debug, Clone, Copy)]
pub struct AppProperties {
    pub slides: usize,
    pub paragraphs: usize,
}

impl AppProperties {
    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                "\n",
                r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
                r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
                "<Application>{app}</Application>",
                "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
                "<Paragraphs>{paragraphs}</Paragraphs>",
                "<Slides>{slides}</Slides>",
                "<Notes>0</Notes>",
                "<HiddenSlides>0</HiddenSlides>",
                "<AppVersion>{version}</AppVersion>",
                "</Properties>"
            ),
            app = env!("CARGO_PKG_NAME"),
            paragraphs = self.paragraphs,
            slides = self.slides,
            version = app_version(),
        )
    }
}

/// `AppVersion` must look like `XX.YYYY`.
fn app_version() -> String {
    let major: u32 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0);
    let minor: u32 = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    format!("{:02}.{:04}", major, minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_properties_xml() {
        let props = CoreProperties {
            title: Some("Q&A".to_string()),
            creator: "journey-deck".to_string(),
            created: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };
        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Q&amp;A</dc:title>"));
        assert!(xml.contains("<dc:creator>journey-deck</dc:creator>"));
        assert!(xml.contains(r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-01-02T03:04:05Z</dcterms:created>"#));
    }

    #[test]
    fn test_app_properties_xml() {
        let xml = AppProperties {
            slides: 22,
            paragraphs: 180,
        }
        .to_xml();
        assert!(xml.contains("<Slides>22</Slides>"));
        assert!(xml.contains("<Paragraphs>180</Paragraphs>"));
        assert!(xml.contains("<AppVersion>00.0001</AppVersion>"));
    }
}
