use std::io::{self, Write};

use jiff::Timestamp;
use tracing::info;
use vitrina::countdown::{CountdownBoard, TICK_INTERVAL};
use vitrina_app::{render::write_catalog, sync::sync_discounts};

use crate::cli::{GlobalArgs, load_catalog};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub(crate) async fn run(global: &GlobalArgs) -> Result<(), String> {
    let client = global.client()?;
    let store = global.store();

    let catalog = load_catalog(&client).await?;
    let (mut discounts, _source) = sync_discounts(&client, &store).await;

    let ids: Vec<_> = catalog.products.iter().map(|product| product.id).collect();
    let mut board = CountdownBoard::new();
    let mut interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }

        let now = Timestamp::now();
        let outcome = board.tick(ids.iter().copied(), &discounts, now);

        if outcome.rerender {
            info!("an offer expired, refreshing catalog");

            discounts = store.discounts().await;
        }

        let mut out = io::stdout().lock();

        write!(out, "{CLEAR_SCREEN}")
            .and_then(|()| write_catalog(&mut out, &catalog, &discounts, now))
            .and_then(|()| out.flush())
            .map_err(|error| format!("failed to write catalog: {error}"))?;
    }
}
