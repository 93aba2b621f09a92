use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::warn;
use vitrina::catalog::Catalog;
use vitrina_app::{
    client::{DEFAULT_API_URL, StorefrontClient},
    local::{DEFAULT_STORE_PATH, LocalStore},
};

mod admin;
mod background;
mod catalog;
mod discount;
mod order;
mod token;

#[derive(Debug, Parser)]
#[command(name = "vitrina-app", about = "Vitrina storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
pub(crate) struct GlobalArgs {
    /// Storefront API origin
    #[arg(long, env = "VITRINA_API", default_value = DEFAULT_API_URL, global = true)]
    api: String,

    /// Local cache file
    #[arg(long, env = "VITRINA_STORE", default_value = DEFAULT_STORE_PATH, global = true)]
    store: PathBuf,
}

impl GlobalArgs {
    pub(crate) fn client(&self) -> Result<StorefrontClient, String> {
        StorefrontClient::new(&self.api).map_err(|error| format!("invalid --api value: {error}"))
    }

    pub(crate) fn store(&self) -> LocalStore {
        LocalStore::new(&self.store)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Token(token::TokenCommand),
    Catalog(catalog::CatalogCommand),
    Order(order::OrderArgs),
    Discount(discount::DiscountCommand),
    Background(background::BackgroundCommand),
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let global = &self.global;

        match self.command {
            Commands::Token(command) => token::run(command),
            Commands::Catalog(command) => catalog::run(global, command).await,
            Commands::Order(args) => order::run(global, args).await,
            Commands::Discount(command) => discount::run(global, command).await,
            Commands::Background(command) => background::run(global, command).await,
            Commands::Admin(command) => admin::run(global, command).await,
        }
    }
}

/// The server's catalog, or the bundled one when the server is unreachable.
pub(crate) async fn load_catalog(client: &StorefrontClient) -> Result<Catalog, String> {
    match client.catalog().await {
        Ok(catalog) => Ok(catalog),
        Err(error) => {
            warn!(%error, "could not fetch catalog, using bundled catalog");

            Catalog::bundled().map_err(|error| format!("bundled catalog is invalid: {error}"))
        }
    }
}
