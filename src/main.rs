use std::error::Error;

use clap::Parser;

use chronogrid_doc::content::OUTPUT_FILE_NAME;

/// Writes the ChronoGrid internal research document to `chronogrid_internal_document.pdf` in the
/// current directory.
///
/// Font metrics are looked up under `assets/fonts`, in the directory named by
/// `CHRONOGRID_FONTS_DIR` and in the usual system font locations.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = chronogrid_doc::run(OUTPUT_FILE_NAME) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
