//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use uproot_core::MemoryTree;
use uproot_core::Uproot;
use uproot_core::UprootConfig;

pub fn execute(args: &CleanArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = UprootConfig::default().temp_dir_name(args.temp.temp_name.as_str());
    let label = Path::new(&args.temp.temp_name);

    // The temp dir location depends only on the config
    let tree = MemoryTree::new();
    let uproot = add_source_context(Uproot::with_config(&tree, config), label)?;
    let temp_dir = uproot.temp_dir();
    // Informational only; removal of a missing directory succeeds anyway
    let existed = temp_dir.exists();

    add_source_context(uproot.remove_temp(), label)?;

    formatter.format_clean_result(temp_dir, existed)
}
