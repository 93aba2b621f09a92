use std::path::PathBuf;

use clap::{Args, Subcommand};
use vitrina_app::local::image_data_url;

use super::GlobalArgs;

#[derive(Debug, Args)]
pub(crate) struct BackgroundCommand {
    #[command(subcommand)]
    command: BackgroundSubcommand,
}

#[derive(Debug, Subcommand)]
enum BackgroundSubcommand {
    /// Use an image file as the catalog background
    Set {
        /// Image file
        file: PathBuf,
    },

    /// Remove the catalog background
    Clear,
}

pub(crate) async fn run(global: &GlobalArgs, command: BackgroundCommand) -> Result<(), String> {
    let store = global.store();

    let background = match command.command {
        BackgroundSubcommand::Set { file } => Some(
            image_data_url(&file)
                .await
                .map_err(|error| format!("Por favor selecciona un archivo de imagen. ({error})"))?,
        ),
        BackgroundSubcommand::Clear => None,
    };

    let cleared = background.is_none();

    store
        .set_background(background)
        .await
        .map_err(|error| format!("failed to save background: {error}"))?;

    if cleared {
        println!("background cleared");
    } else {
        println!("background saved to {}", store.path().display());
    }

    Ok(())
}
