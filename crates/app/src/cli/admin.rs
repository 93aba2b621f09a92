use clap::{Args, Subcommand};
use jiff::Timestamp;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use vitrina::gesture::{AdminGesture, AdminModal, GestureOutcome, VerifyResult};
use vitrina_app::{
    auth::AdminToken,
    client::StorefrontClient,
    triggers::{Trigger, parse_trigger},
};

use super::GlobalArgs;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Submit an admin token to the server
    Verify(AdminTokenArgs),

    /// Report whether this session holds admin access
    Status(AdminTokenArgs),

    /// Open the token prompt with the admin gesture typed on stdin
    Unlock,
}

#[derive(Debug, Args)]
struct AdminTokenArgs {
    /// Admin token
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

pub(crate) async fn run(global: &GlobalArgs, command: AdminCommand) -> Result<(), String> {
    let client = global.client()?;

    match command.command {
        AdminSubcommand::Verify(args) => {
            let token = args
                .token
                .ok_or_else(|| "Token requerido".to_string())?;

            let mut modal = AdminModal::new();
            modal.open();

            modal.submit(submit_token(&client, token).await);

            if !modal.is_unlocked() {
                return Err(modal.message().unwrap_or("Token inválido").to_string());
            }

            println!("Acceso concedido.");
        }
        AdminSubcommand::Status(args) => {
            if let Some(token) = args.token {
                match client.verify_token(&AdminToken::new(token)).await {
                    Ok(VerifyResult::Accepted(_)) => {}
                    Ok(VerifyResult::Rejected(message)) => println!("{message}"),
                    Err(error) => warn!(%error, "could not verify admin token"),
                }
            }

            let admin = client
                .admin_status()
                .await
                .map_err(|error| format!("failed to fetch admin status: {error}"))?;

            println!("admin: {admin}");
        }
        AdminSubcommand::Unlock => unlock(&client).await?,
    }

    Ok(())
}

async fn submit_token(client: &StorefrontClient, token: String) -> VerifyResult {
    client
        .verify_token(&AdminToken::new(token))
        .await
        .unwrap_or_else(|error| {
            warn!(%error, "could not verify admin token");

            VerifyResult::Rejected("Error de red verificando token.".to_string())
        })
}

async fn unlock(client: &StorefrontClient) -> Result<(), String> {
    println!("Gesto: logo, footer, title (o ctrl+shift+a). Línea vacía cierra el token.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut gesture = AdminGesture::new();
    let mut modal = AdminModal::new();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| format!("failed to read input: {error}"))?
    {
        let line = line.trim();

        if modal.is_open() {
            if line.is_empty() {
                modal.close();

                continue;
            }

            modal.submit(submit_token(client, line.to_string()).await);

            if modal.is_unlocked() {
                println!("Acceso concedido.");

                return Ok(());
            }

            if let Some(message) = modal.message() {
                println!("{message}");
            }

            continue;
        }

        match parse_trigger(line) {
            Some(Trigger::Shortcut) => modal.open(),
            Some(Trigger::Region(region)) => {
                let outcome = gesture.trigger(region, Timestamp::now());

                debug!(?region, ?outcome, "gesture trigger");

                if outcome == GestureOutcome::ModalOpened {
                    modal.open();
                }
            }
            None => debug!(line, "ignoring input"),
        }

        if modal.is_open() {
            println!("Token de administrador:");
        }
    }

    Ok(())
}