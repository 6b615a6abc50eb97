// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::error::GenerateError;
use crate::header::Transform;
use crate::layout::LibLayout;
use std::io::Write;

pub const BANNER: &str = "ESP-DashboardPlus - Arduino IDE Header Generator";
pub const DONE_MESSAGE: &str = "Done! The library is now ready for Arduino IDE.";

/// Runs one header generation pass and reports progress to `out`.
///
/// A missing input page is reported on `out` and returned as
/// [`GenerateError::MissingInputFile`] before anything is written to disk.
/// Failures of `transform` or of `out` itself are returned untouched.
pub fn run_with(
    layout: &LibLayout,
    out: &mut impl Write,
    transform: &impl Transform,
) -> Result<(), GenerateError> {
    let input = &layout.input_file;
    let output = &layout.output_file;
    let report = |e| GenerateError::io("<stdout>", e);

    if !input.exists() {
        writeln!(out, "Error: {} not found", input.display()).map_err(report)?;
        writeln!(out, "Make sure extras/dashboard.html exists").map_err(report)?;
        return Err(GenerateError::MissingInputFile {
            path: input.clone(),
        });
    }

    writeln!(out, "{BANNER}").map_err(report)?;
    writeln!(out, "{}", "=".repeat(50)).map_err(report)?;
    writeln!(out, "Input:  {}", input.display()).map_err(report)?;
    writeln!(out, "Output: {}", output.display()).map_err(report)?;
    writeln!(out).map_err(report)?;

    log::debug!("Library root: {}", layout.root.display());
    transform.transform(input, output)?;

    writeln!(out, "\n{DONE_MESSAGE}").map_err(report)?;
    Ok(())
}
