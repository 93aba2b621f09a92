use clap::Args;
use jiff::Timestamp;
use vitrina::{catalog::ProductId, order::order_message};
use vitrina_app::{orders::whatsapp_url, sync::sync_discounts};

use super::{GlobalArgs, load_catalog};

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Product to order
    product: ProductId,
}

pub(crate) async fn run(global: &GlobalArgs, args: OrderArgs) -> Result<(), String> {
    let client = global.client()?;
    let store = global.store();

    let catalog = load_catalog(&client).await?;
    let (discounts, _source) = sync_discounts(&client, &store).await;

    let product = catalog
        .product(args.product)
        .ok_or_else(|| format!("product {} not found", args.product))?;

    let now = Timestamp::now();

    let url = whatsapp_url(&catalog, product, &discounts, now).map_err(|error| {
        format!("Lo sentimos, el número de WhatsApp del negocio no está disponible en este momento. ({error})")
    })?;

    println!("{}\n", order_message(&catalog, product, &discounts, now));
    println!("{url}");

    Ok(())
}
