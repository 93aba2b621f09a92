//! Terminal rendering of the catalog.

use std::io;

use jiff::Timestamp;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use vitrina::{
    catalog::{Catalog, MediaItem, MediaKind},
    countdown::Remaining,
    discounts::DiscountMapping,
    modal::ModalView,
};

/// Prefix shown before a live offer countdown.
pub const COUNTDOWN_PREFIX: &str = "La oferta termina en: ";

/// Render the catalog as a table.
#[must_use]
pub fn catalog_table(catalog: &Catalog, discounts: &DiscountMapping, now: Timestamp) -> String {
    let mut builder = Builder::default();

    builder.push_record(["#", "Producto", "Precio", "Oferta", "Media"]);

    for product in &catalog.products {
        let countdown = discounts
            .active_for(product.id, now)
            .and_then(|record| Remaining::until(record.expires_at(), now))
            .map(|remaining| format!("{COUNTDOWN_PREFIX}{remaining}"))
            .unwrap_or_default();

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.price_label(discounts, now).to_string(),
            countdown,
            media_summary(product.media.iter().map(|media| media.kind)),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());

    table.to_string()
}

fn media_summary(kinds: impl Iterator<Item = MediaKind>) -> String {
    let (mut images, mut videos, mut placeholders) = (0_usize, 0_usize, 0_usize);

    for kind in kinds {
        match kind {
            MediaKind::Image => images += 1,
            MediaKind::Video => videos += 1,
            MediaKind::Placeholder => placeholders += 1,
        }
    }

    let mut parts = Vec::new();

    if images > 0 {
        parts.push(format!("{images} img"));
    }

    if videos > 0 {
        parts.push(format!("{videos} video"));
    }

    if placeholders > 0 {
        parts.push("placeholder".to_string());
    }

    parts.join(", ")
}

/// Render the product detail view: title, description, price, offer
/// countdown and the visible gallery slide.
#[must_use]
pub fn product_detail(view: &ModalView<'_>, discounts: &DiscountMapping, now: Timestamp) -> String {
    let product = view.product();

    let mut lines = vec![product.name.clone()];

    if !product.description.is_empty() {
        lines.push(product.description.clone());
    }

    lines.push(String::new());
    lines.push(format!("Precio: {}", view.price_label(discounts, now)));

    if let Some(remaining) = view.countdown(discounts, now) {
        lines.push(format!("{COUNTDOWN_PREFIX}{remaining}"));
    }

    if let Some(media) = view.current_media() {
        lines.push(format!(
            "[{}/{}] {}",
            view.slide() + 1,
            product.media.len(),
            slide_label(media)
        ));
    }

    lines.join("\n")
}

fn slide_label(media: &MediaItem) -> String {
    match media.kind {
        MediaKind::Image => format!("imagen {}", media.content),
        MediaKind::Video => format!("video {}", media.content),
        MediaKind::Placeholder => media.content.clone(),
    }
}

/// Write the catalog table followed by a blank line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_catalog(
    out: &mut impl io::Write,
    catalog: &Catalog,
    discounts: &DiscountMapping,
    now: Timestamp,
) -> io::Result<()> {
    if !catalog.business_name.is_empty() {
        writeln!(out, "{}", catalog.business_name)?;
    }

    writeln!(out, "{}\n", catalog_table(catalog, discounts, now))
}
