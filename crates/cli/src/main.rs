use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::Command;
use mktree_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Materialize directory trees from indented layout files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Create(args) => commands::create::run(args),
        Command::Check(args) => commands::check::run(args),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::{Cli, PROGRAM_NAME};

    #[test]
    fn command_name_comes_from_the_runtime_constant() {
        assert_eq!(Cli::command().get_name(), PROGRAM_NAME);
    }

    #[test]
    fn cli_arguments_are_well_formed() {
        Cli::command().debug_assert();
    }
}
