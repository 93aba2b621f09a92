use std::io;

use jiff::Timestamp;
use vitrina_app::{
    render::write_catalog,
    sync::{DiscountSource, sync_discounts},
};

use crate::cli::{GlobalArgs, load_catalog};

pub(crate) async fn run(global: &GlobalArgs) -> Result<(), String> {
    let client = global.client()?;
    let store = global.store();

    let catalog = load_catalog(&client).await?;
    let (discounts, source) = sync_discounts(&client, &store).await;

    write_catalog(&mut io::stdout().lock(), &catalog, &discounts, Timestamp::now())
        .map_err(|error| format!("failed to write catalog: {error}"))?;

    if source == DiscountSource::Cache {
        println!("(descuentos desde la copia local)");
    }

    Ok(())
}
