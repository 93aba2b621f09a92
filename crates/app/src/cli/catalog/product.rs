use clap::Args;
use jiff::Timestamp;
use vitrina::{catalog::ProductId, modal::ModalView};
use vitrina_app::{render::product_detail, sync::sync_discounts};

use crate::cli::{GlobalArgs, load_catalog};

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product to show
    id: ProductId,

    /// Gallery slide to show, counted from zero and wrapping past the last
    #[arg(long, default_value_t = 0)]
    slide: usize,
}

pub(crate) async fn run(global: &GlobalArgs, args: ProductArgs) -> Result<(), String> {
    let client = global.client()?;
    let store = global.store();

    let catalog = load_catalog(&client).await?;

    let product = catalog
        .product(args.id)
        .ok_or_else(|| format!("product {} not found", args.id))?;

    let (discounts, _source) = sync_discounts(&client, &store).await;

    let steps = args.slide % product.media.len().max(1);
    let view = (0..steps).fold(ModalView::open(product), |view, _| view.next());

    println!("{}", product_detail(&view, &discounts, Timestamp::now()));

    Ok(())
}
