use std::error::Error;

use env_logger::Env;
use journey_deck::deck::{DeckSettings, build_and_save};

/// Writes `CalendarApp_Development_Journey.pptx` to the working directory.
///
/// Set `RUST_LOG=debug` to trace each slide and package part.
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match build_and_save(&DeckSettings::default()) {
        Ok(path) => println!("Presentation saved as: {}", path.display()),
        Err(err) => {
            eprintln!("error: {}", err);
            print_error_sources(&err);
            std::process::exit(1);
        },
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
