use clap::Args;
use jiff::Timestamp;
use rust_decimal::Decimal;
use tracing::warn;
use vitrina::{
    catalog::ProductId,
    discounts::{DiscountError, DiscountRecord},
    gesture::VerifyResult,
};
use vitrina_app::{
    auth::AdminToken,
    sync::{DiscountReach, apply_discount},
};

use crate::cli::{GlobalArgs, load_catalog};

#[derive(Debug, Args)]
pub(crate) struct SetDiscountArgs {
    /// Product to discount
    #[arg(long)]
    product: ProductId,

    /// Percentage off, strictly between 0 and 100
    #[arg(long)]
    percent: Decimal,

    /// Number of days the discount lasts
    #[arg(long)]
    days: i64,

    /// Admin token used to open a session before saving
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

pub(crate) async fn run(global: &GlobalArgs, args: SetDiscountArgs) -> Result<(), String> {
    let record =
        DiscountRecord::for_days(args.percent, args.days, Timestamp::now()).map_err(|error| {
            match error {
                DiscountError::PercentOutOfRange(_) => {
                    "Ingrese un porcentaje válido (1-99).".to_string()
                }
                DiscountError::InvalidDuration(_) => {
                    "Ingrese una duración en días válida.".to_string()
                }
                other => other.to_string(),
            }
        })?;

    let client = global.client()?;
    let store = global.store();

    let catalog = load_catalog(&client).await?;

    if catalog.product(args.product).is_none() {
        return Err(format!("product {} not found", args.product));
    }

    if let Some(token) = args.token {
        match client.verify_token(&AdminToken::new(token)).await {
            Ok(VerifyResult::Accepted(_)) => {}
            Ok(VerifyResult::Rejected(message)) => return Err(message),
            Err(error) => warn!(%error, "could not verify admin token"),
        }
    }

    let reach = apply_discount(&client, &store, args.product, record)
        .await
        .map_err(|error| format!("No se pudo guardar el descuento. ({error})"))?;

    match reach {
        DiscountReach::Global => println!("Descuento aplicado globalmente."),
        DiscountReach::Local => {
            println!("Descuento aplicado localmente (no fue posible guardar en el servidor).");
        }
    }

    Ok(())
}
