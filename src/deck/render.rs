//! Rendering descriptors onto PresentationML slides.

use crate::deck::content::development_journey;
use crate::deck::descriptor::{SlideDescriptor, SlideLayout};
use crate::deck::error::DeckError;
use crate::deck::outline::OutlineEntry;
use crate::deck::settings::DeckSettings;
use crate::deck::Deck;
use crate::ooxml::pptx::{LayoutKind, MutablePresentation, MutableSlide};
use crate::ooxml::Result;
use log::{debug, info};
use std::path::PathBuf;

impl From<SlideLayout> for LayoutKind {
    fn from(layout: SlideLayout) -> Self {
        match layout {
            SlideLayout::Title => LayoutKind::TitleSlide,
            SlideLayout::TitleAndBody => LayoutKind::TitleAndContent,
        }
    }
}

/// Lay every slide of `deck` out in a new presentation, in deck order.
///
/// The first title slide's title becomes the document title.
pub fn render(deck: &Deck, settings: &DeckSettings) -> std::result::Result<MutablePresentation, DeckError> {
    let mut pres = MutablePresentation::with_size(settings.slide_width, settings.slide_height);
    pres.set_creator(&settings.creator);
    if let Some(title_slide) = deck.title_slide() {
        pres.set_title(title_slide.title());
    }

    for (index, descriptor) in deck.iter().enumerate() {
        debug!(
            "slide {}: {:?} '{}' ({} outline entries)",
            index,
            descriptor.layout(),
            descriptor.title(),
            descriptor.outline().len()
        );
        let slide = pres.add_slide(descriptor.layout().into());
        fill_slide(slide, descriptor).map_err(|source| DeckError::Render {
            index,
            title: descriptor.title().to_string(),
            source,
        })?;
    }

    Ok(pres)
}

fn fill_slide(slide: &mut MutableSlide, descriptor: &SlideDescriptor) -> Result<()> {
    slide.set_title(descriptor.title());
    if let Some(subtitle) = descriptor.subtitle() {
        slide.set_subtitle(subtitle)?;
    }
    for entry in descriptor.outline() {
        match entry {
            OutlineEntry::Spacer => slide.add_blank_paragraph()?,
            _ => slide.add_paragraph(entry.text(), entry.level())?,
        }
    }
    Ok(())
}

/// Build the development-journey deck and write it to
/// `settings.output_path`, returning the path written.
pub fn build_and_save(settings: &DeckSettings) -> std::result::Result<PathBuf, DeckError> {
    let deck = development_journey();
    let pres = render(&deck, settings)?;

    let path = settings.output_path.clone();
    pres.save(&path).map_err(|source| DeckError::Save {
        path: path.clone(),
        source,
    })?;

    info!("saved {} slides to {}", pres.slide_count(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::Emu;
    use crate::ooxml::OoxmlError;
    use crate::ooxml::pptx::Paragraph;

    #[test]
    fn test_layout_mapping() {
        assert_eq!(LayoutKind::from(SlideLayout::Title), LayoutKind::TitleSlide);
        assert_eq!(
            LayoutKind::from(SlideLayout::TitleAndBody),
            LayoutKind::TitleAndContent
        );
    }

    #[test]
    fn test_render_outline_levels() {
        let deck: Deck = [SlideDescriptor::content("Structure")
            .point("API:")
            .detail("Controllers")
            .spacer()
            .point("Web:")]
        .into_iter()
        .collect();

        let pres = render(&deck, &DeckSettings::default()).unwrap();
        let slide = &pres.slides()[0];
        assert_eq!(slide.layout(), LayoutKind::TitleAndContent);
        assert_eq!(slide.title(), Some("Structure"));
        assert_eq!(
            slide.paragraphs(),
            &[
                Paragraph::new("API:", 0),
                Paragraph::new("Controllers", 1),
                Paragraph::blank(),
                Paragraph::new("Web:", 0),
            ]
        );
    }

    #[test]
    fn test_render_uses_configured_size() {
        let settings = DeckSettings::new()
            .with_slide_size(Emu::from_inches(13.333), Emu::from_inches(7.5))
            .with_creator("Calendar Team");
        let pres = render(&development_journey(), &settings).unwrap();

        assert_eq!(pres.slide_width(), Emu::new(12_191_695));
        assert_eq!(pres.slide_height(), Emu::new(6_858_000));
    }

    #[test]
    fn test_render_title_slide() {
        let deck = development_journey();
        let pres = render(&deck, &DeckSettings::default()).unwrap();

        assert_eq!(pres.slide_count(), 22);
        let first = &pres.slides()[0];
        assert_eq!(first.layout(), LayoutKind::TitleSlide);
        assert_eq!(first.subtitle().len(), 2);
        assert_eq!(first.subtitle()[1].text, "Built with Claude AI");
    }

    #[test]
    fn test_render_error_names_slide() {
        let mut deck = Deck::new();
        deck.push(SlideDescriptor::content("Fine").point("ok"));
        // A detail line would need a body placeholder the title layout lacks
        deck.push(SlideDescriptor::title_slide("Cover", "sub").detail("stray"));

        let err = render(&deck, &DeckSettings::default()).unwrap_err();
        match err {
            DeckError::Render { index, title, source } => {
                assert_eq!(index, 1);
                assert_eq!(title, "Cover");
                assert!(matches!(source, OoxmlError::PlaceholderNotFound { .. }));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_and_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DeckSettings::new().with_output_path(dir.path().join("deck.pptx"));

        let path = build_and_save(&settings).unwrap();
        assert_eq!(path, settings.output_path);
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
