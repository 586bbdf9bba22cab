//! Report lines on stdout
//!
//! One line per reported subdirectory, either aligned text or JSON lines.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::scan::SizeResult;

pub const NAME_WIDTH: usize = 30;
pub const SIZE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: String,
    pub path: PathBuf,
    pub size: SizeResult,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    name: &'a str,
    path: String,
    bytes: Option<u64>,
    size: String,
    error: Option<&'a str>,
}

impl ReportLine {
    /// `<name padded to 30> Size: <size padded to 10>`
    pub fn to_text(&self) -> String {
        format!(
            "{:<name_w$} Size: {:<size_w$}",
            self.name,
            self.size.display(),
            name_w = NAME_WIDTH,
            size_w = SIZE_WIDTH,
        )
    }

    fn to_json(&self) -> JsonLine<'_> {
        JsonLine {
            name: &self.name,
            path: self.path.display().to_string(),
            bytes: self.size.bytes(),
            size: self.size.display(),
            error: match &self.size {
                SizeResult::Failed(reason) => Some(reason.as_str()),
                SizeResult::Size(_) => None,
            },
        }
    }
}

pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_line(&mut self, line: &ReportLine) -> Result<()> {
        self.emit(line).map_err(Error::Output)
    }

    fn emit(&mut self, line: &ReportLine) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", line.to_text())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &line.to_json())?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
