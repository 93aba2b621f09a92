//! Product modal view state

use jiff::Timestamp;

use crate::{
    catalog::{MediaItem, Product},
    countdown::Remaining,
    discounts::DiscountMapping,
    pricing::PriceLabel,
};

/// The product detail view: which product is open and which slide shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView<'a> {
    product: &'a Product,
    slide: usize,
}

impl<'a> ModalView<'a> {
    /// Open `product` on its first slide.
    pub fn open(product: &'a Product) -> Self {
        Self { product, slide: 0 }
    }

    /// Product being shown.
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Index of the visible slide.
    pub fn slide(&self) -> usize {
        self.slide
    }

    /// Media item on the visible slide, if the product has media.
    pub fn current_media(&self) -> Option<&'a MediaItem> {
        self.product.media.get(self.slide)
    }

    /// Move to the next slide, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// Move to the previous slide, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        self.step(-1)
    }

    fn step(self, direction: isize) -> Self {
        let total = self.product.media.len();

        if total == 0 {
            return self;
        }

        let slide = self
            .slide
            .checked_add_signed(direction)
            .unwrap_or(total - 1)
            % total;

        Self { slide, ..self }
    }

    /// Price label for the open product.
    pub fn price_label(&self, discounts: &DiscountMapping, now: Timestamp) -> PriceLabel {
        self.product.price_label(discounts, now)
    }

    /// Offer countdown for the open product, while its discount is active.
    pub fn countdown(&self, discounts: &DiscountMapping, now: Timestamp) -> Option<Remaining> {
        discounts
            .active_for(self.product.id, now)
            .and_then(|record| Remaining::until(record.expires_at(), now))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn slides_wrap_in_both_directions() -> TestResult {
        let catalog = Catalog::bundled()?;
        let product = catalog.product(2).ok_or("missing product")?;

        let view = ModalView::open(product);
        assert_eq!(view.slide(), 0);

        let view = view.previous();
        assert_eq!(view.slide(), 1);

        let view = view.next();
        assert_eq!(view.slide(), 0);

        let view = view.next().next();
        assert_eq!(view.slide(), 0);

        Ok(())
    }

    #[test]
    fn single_slide_stays_put() -> TestResult {
        let catalog = Catalog::bundled()?;
        let product = catalog.product(1).ok_or("missing product")?;

        let view = ModalView::open(product).next().previous();

        assert_eq!(view.slide(), 0);
        assert_eq!(view.current_media(), product.media.first());

        Ok(())
    }

    #[test]
    fn countdown_only_while_discount_is_active() -> TestResult {
        let catalog = Catalog::bundled()?;
        let product = catalog.product(3).ok_or("missing product")?;
        let discounts =
            DiscountMapping::from_value(json!({ "3": { "percent": 50, "expiresAt": 65_000 } }))?;
        let view = ModalView::open(product);

        let live = Timestamp::from_millisecond(0)?;
        assert_eq!(
            view.countdown(&discounts, live).map(|left| left.to_string()).as_deref(),
            Some("1m 5s")
        );
        assert_eq!(view.price_label(&discounts, live).to_string(), "Q20 → Q10");

        let lapsed = Timestamp::from_millisecond(65_000)?;
        assert!(view.countdown(&discounts, lapsed).is_none());

        Ok(())
    }
}
