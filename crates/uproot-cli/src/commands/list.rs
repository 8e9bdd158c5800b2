//! List command implementation.

use super::open_source;
use crate::cli::ListArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use uproot_core::Uproot;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let tree = open_source(&args.source)?;
    let uproot = add_source_context(Uproot::new(&tree), &args.source)?;

    formatter.format_file_list(&args.source, uproot.files())
}
