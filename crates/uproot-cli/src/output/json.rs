//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use uproot_core::CopyReport;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    source: String,
    file_count: usize,
    files: &'a [String],
}

#[derive(Serialize)]
struct CopyOutput {
    target: String,
    files_written: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
}

#[derive(Serialize)]
struct CleanOutput {
    temp_dir: String,
    existed: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format_file_list(&self, source: &Path, files: &[String]) -> Result<()> {
        let data = ListOutput {
            source: source.display().to_string(),
            file_count: files.len(),
            files,
        };
        Self::output(&JsonOutput::success("list", data))
    }

    fn format_copy_result(&self, target: &Path, report: &CopyReport) -> Result<()> {
        let data = CopyOutput {
            target: target.display().to_string(),
            files_written: report.files_written,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        };
        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_clean_result(&self, temp_dir: &Path, existed: bool) -> Result<()> {
        let data = CleanOutput {
            temp_dir: temp_dir.display().to_string(),
            existed,
        };
        Self::output(&JsonOutput::success("clean", data))
    }
}
