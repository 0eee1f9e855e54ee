//! Errors raised while building the deck.

use crate::ooxml::OoxmlError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    /// A slide could not be laid out on its layout's placeholders.
    #[error("failed to render slide {index} ('{title}')")]
    Render {
        index: usize,
        title: String,
        #[source]
        source: OoxmlError,
    },

    /// The package could not be serialized or written.
    #[error("failed to save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: OoxmlError,
    },
}
