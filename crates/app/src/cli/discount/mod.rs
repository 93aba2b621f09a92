use clap::{Args, Subcommand};

use super::GlobalArgs;

mod set;

#[derive(Debug, Args)]
pub(crate) struct DiscountCommand {
    #[command(subcommand)]
    command: DiscountSubcommand,
}

#[derive(Debug, Subcommand)]
enum DiscountSubcommand {
    /// Apply a time-limited discount to a product
    Set(set::SetDiscountArgs),
}

pub(crate) async fn run(global: &GlobalArgs, command: DiscountCommand) -> Result<(), String> {
    match command.command {
        DiscountSubcommand::Set(args) => set::run(global, args).await,
    }
}
