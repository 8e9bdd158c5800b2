//! Example: Extracting assets embedded at build time
//!
//! Run with: `cargo run --example embedded_assets`

use include_dir::Dir;
use include_dir::include_dir;
use uproot_core::Uproot;
use uproot_core::UprootConfig;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/assets");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = UprootConfig::default().temp_dir_name(env!("CARGO_PKG_NAME"));
    let uproot = Uproot::with_config(&ASSETS, config)?;

    println!("Embedded files:");
    for file in uproot.files() {
        println!("  {file}");
    }

    let report = uproot.copy_to_temp()?;
    println!(
        "\nCopied {} files ({} bytes) to {}",
        report.files_written,
        report.bytes_written,
        uproot.temp_dir().display()
    );

    // Consumers that need real paths can read from the temp dir now
    let b = std::fs::read_to_string(uproot.temp_dir().join("sub").join("b.txt"))?;
    println!("sub/b.txt: {}", b.trim_end());

    uproot.remove_temp()?;
    println!("Removed {}", uproot.temp_dir().display());

    Ok(())
}
