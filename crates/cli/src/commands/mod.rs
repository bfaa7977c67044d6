pub mod check;
pub mod create;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
pub use check::CheckArgs;
pub use create::CreateArgs;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the tree described by a layout file.
    ///
    /// Example:
    ///   mktree create fixtures.tree --prefix /tmp/sandbox
    ///   cat layout | mktree create -
    Create(CreateArgs),

    /// Validate a layout file without touching the filesystem.
    Check(CheckArgs),
}

/// Reads the layout text; `-` means stdin.
pub(crate) fn read_layout(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read layout from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read layout file {}", path.display()))
    }
}
