use clap::{Args, Subcommand};

use super::GlobalArgs;

mod product;
mod show;
mod watch;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Print the catalog with current prices
    Show,

    /// Show one product's detail view
    Product(product::ProductArgs),

    /// Keep the catalog on screen with live offer countdowns
    Watch,
}

pub(crate) async fn run(global: &GlobalArgs, command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Show => show::run(global).await,
        CatalogSubcommand::Product(args) => product::run(global, args).await,
        CatalogSubcommand::Watch => watch::run(global).await,
    }
}
