use clap::{Args, Subcommand};

mod generate;
mod hash;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Generate a new admin token and its hash
    Generate,

    /// Hash an existing admin token
    Hash(hash::HashTokenArgs),
}

pub(crate) fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Generate => generate::run(),
        TokenSubcommand::Hash(args) => hash::run(&args),
    }
}
