//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use uproot_core::CopyReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, text: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {text}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(text);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_file_list(&self, source: &Path, files: &[String]) -> Result<()> {
        // The list itself is the result, so it is printed even when quiet
        for file in files {
            self.term.write_line(file)?;
        }

        if self.verbose && !self.quiet {
            let _ = self.term.write_line(&format!(
                "{} files in {}",
                files.len(),
                source.display()
            ));
        }

        Ok(())
    }

    fn format_copy_result(&self, target: &Path, report: &CopyReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Extracted to {}", target.display()));
        let _ = self
            .term
            .write_line(&format!("  Files written: {}", report.files_written));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.directories_created));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_clean_result(&self, temp_dir: &Path, existed: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if existed {
            self.headline(&format!("Removed {}", temp_dir.display()));
        } else {
            self.headline(&format!("Nothing to remove at {}", temp_dir.display()));
        }

        Ok(())
    }
}
