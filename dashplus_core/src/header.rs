// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Turns the dashboard page into a C header that embeds it as a `PROGMEM`
//! byte array.
use crate::error::GenerateError;
use flate2::Compression;
use flate2::GzBuilder;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// How the page bytes are stored in the generated array.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Encoding {
    /// Gzip at best compression, served with `Content-Encoding: gzip`.
    #[default]
    Gzip,
    Raw,
}

/// Shape of the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Stem of the emitted C identifiers, e.g. `DASHBOARD_HTML` gives
    /// `DASHBOARD_HTML[]` and `DASHBOARD_HTML_LEN`.
    pub symbol: String,
    pub encoding: Encoding,
    pub bytes_per_line: usize,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            symbol: "DASHBOARD_HTML".to_owned(),
            encoding: Encoding::Gzip,
            bytes_per_line: 16,
        }
    }
}

impl HeaderOptions {
    fn validate(&self) -> Result<(), GenerateError> {
        if !is_c_identifier(&self.symbol) {
            return Err(GenerateError::InvalidOptions(format!(
                "'{}' is not a valid C identifier",
                self.symbol
            )));
        }
        if self.bytes_per_line == 0 {
            return Err(GenerateError::InvalidOptions(
                "bytes_per_line must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The step that turns the input page into the output header.
pub trait Transform {
    fn transform(&self, input: &Path, output: &Path) -> Result<(), GenerateError>;
}

/// Writes a header file according to its [`HeaderOptions`].
#[derive(Debug, Clone, Default)]
pub struct HeaderWriter {
    pub options: HeaderOptions,
}

impl HeaderWriter {
    pub fn new(options: HeaderOptions) -> Self {
        Self { options }
    }
}

impl Transform for HeaderWriter {
    fn transform(&self, input: &Path, output: &Path) -> Result<(), GenerateError> {
        let raw = fs::read(input).map_err(|e| GenerateError::io(input, e))?;
        if raw.is_empty() {
            log::warn!("{} is empty", input.display());
        }

        let source_name = input
            .file_name()
            .map_or_else(|| input.display().to_string(), |n| n.to_string_lossy().into_owned());
        let header = render_header(&source_name, &raw, &self.options)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }
        fs::write(output, header).map_err(|e| GenerateError::io(output, e))?;

        log::info!("Wrote {}", output.display());
        Ok(())
    }
}

/// Generates `output` from `input` with the default header options.
pub fn generate_header(input: &Path, output: &Path) -> Result<(), GenerateError> {
    HeaderWriter::default().transform(input, output)
}

/// Encodes `raw` and renders the complete header text.
///
/// The result depends only on its arguments: gzip output carries a zero
/// modification time and no file name, so rerunning on the same page gives
/// byte-identical headers.
pub fn render_header(
    source_name: &str,
    raw: &[u8],
    options: &HeaderOptions,
) -> Result<String, GenerateError> {
    options.validate()?;

    let payload = encode(raw, options.encoding)?;
    log::debug!(
        "{source_name}: {} bytes -> {} bytes ({})",
        raw.len(),
        payload.len(),
        options.encoding
    );

    let symbol = &options.symbol;
    let gzipped = u8::from(options.encoding == Encoding::Gzip);
    let rows = payload
        .chunks(options.bytes_per_line)
        .map(|chunk| {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}")).collect();
            format!("  {}", bytes.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let mut out = format!(
        "// Generated from {source_name} by generate_header. Do not edit.\n\
         // Original size: {} bytes, embedded size: {} bytes ({})\n\
         #pragma once\n\
         \n\
         #include <Arduino.h>\n\
         \n\
         #define {symbol}_GZIPPED {gzipped}\n\
         #define {symbol}_LEN {}\n\
         \n\
         const uint8_t {symbol}[] PROGMEM = {{\n",
        raw.len(),
        payload.len(),
        options.encoding,
        payload.len(),
    );
    if !rows.is_empty() {
        out.push_str(&rows);
        out.push('\n');
    }
    out.push_str("};\n");

    Ok(out)
}

fn encode(raw: &[u8], encoding: Encoding) -> Result<Vec<u8>, GenerateError> {
    match encoding {
        Encoding::Raw => Ok(raw.to_vec()),
        Encoding::Gzip => {
            let mut encoder = GzBuilder::new()
                .mtime(0)
                .write(Vec::new(), Compression::best());
            encoder
                .write_all(raw)
                .map_err(|e| GenerateError::io("<gzip stream>", e))?;
            encoder
                .finish()
                .map_err(|e| GenerateError::io("<gzip stream>", e))
        }
    }
}
