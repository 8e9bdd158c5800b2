//! Extract command implementation.

use super::open_source;
use crate::cli::ExtractArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use uproot_core::NoopProgress;
use uproot_core::ProgressCallback;
use uproot_core::Uproot;
use uproot_core::UprootConfig;

pub fn execute(
    args: &ExtractArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let mut config = UprootConfig::default().temp_dir_name(args.temp.temp_name.as_str());
    if let Some(mode) = args.dir_mode {
        config = config.dir_mode(mode);
    }
    if let Some(mode) = args.file_mode {
        config = config.file_mode(mode);
    }

    let tree = open_source(&args.source)?;
    let uproot = add_source_context(Uproot::with_config(&tree, config), &args.source)?;

    let target = args
        .output_dir
        .clone()
        .unwrap_or_else(|| uproot.temp_dir().to_path_buf());

    let mut bar;
    let mut noop = NoopProgress;
    let progress: &mut dyn ProgressCallback = if show_progress && CliProgress::should_show() {
        bar = CliProgress::new(uproot.files().len(), "Copying");
        &mut bar
    } else {
        &mut noop
    };

    let report = add_source_context(uproot.copy_to_with_progress(&target, progress), &args.source)?;

    formatter.format_copy_result(&target, &report)
}
