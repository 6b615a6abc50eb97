// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Regenerates `src/dashboard_html.h` from `extras/dashboard.html` so the
//! library can be shipped to the Arduino IDE with the page pre-compressed.
//!
//! Takes no arguments. Paths are resolved from this crate's own directory,
//! so the tool behaves the same whatever directory it is started from.
use dashplus_core::GenerateError;
use dashplus_core::generator::run_with;
use dashplus_core::header::HeaderWriter;
use dashplus_core::layout::LibLayout;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Diagnostics only; the progress report below goes straight to stdout.
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    run()
}

fn run() -> Result<ExitCode, Box<dyn Error>> {
    let mut stdout = std::io::stdout().lock();
    exit_code(run_with(&layout(), &mut stdout, &HeaderWriter::default()))
}

/// The library layout around this crate, fixed at compile time.
fn layout() -> LibLayout {
    LibLayout::from_tool_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
}

/// A missing page is an expected failure and becomes exit status 1.
/// Anything else is returned as an error for `main` to surface.
fn exit_code(result: Result<(), GenerateError>) -> Result<ExitCode, Box<dyn Error>> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(GenerateError::MissingInputFile { .. }) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
