//! Version command implementation

use crate::cli::Output;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {}

/// Execute the version command
pub fn execute(_args: VersionArgs, output: &Output) -> Result<()> {
    println!("{} {}", crate::PKG_NAME, crate::VERSION);

    output.category("About");
    output.key_value("Description:", crate::PKG_DESCRIPTION);
    output.key_value("Profile:", if cfg!(debug_assertions) { "debug" } else { "release" });
    output.key_value("Target:", std::env::consts::ARCH);

    Ok(())
}
