//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use uproot_core::CopyReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the file list of a tree
    fn format_file_list(&self, source: &Path, files: &[String]) -> Result<()>;

    /// Format copy result
    fn format_copy_result(&self, target: &Path, report: &CopyReport) -> Result<()>;

    /// Format temp directory removal; `existed` is whether the directory
    /// was present when the command started
    fn format_clean_result(&self, temp_dir: &Path, existed: bool) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
