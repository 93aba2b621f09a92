//! Countdown
//!
//! Offer countdowns shown next to discounted prices. A board tracks which
//! products had an active discount on the previous tick so the caller knows
//! when a discount lapsed and the catalog needs redrawing.

use std::{collections::HashSet, fmt, time::Duration};

use jiff::Timestamp;

use crate::{catalog::ProductId, discounts::DiscountMapping};

/// How often a live countdown should be recomputed.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Time left until a discount expires, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    /// Whole days.
    pub days: i64,

    /// Hours past the whole days.
    pub hours: i64,

    /// Minutes past the whole hours.
    pub minutes: i64,

    /// Seconds past the whole minutes.
    pub seconds: i64,
}

impl Remaining {
    /// Time left from `now` until `expires_at`, or `None` once expired.
    pub fn until(expires_at: Timestamp, now: Timestamp) -> Option<Self> {
        if now >= expires_at {
            return None;
        }

        // Sub-second remainders render as 0s until the expiry instant.
        let total = (expires_at.as_millisecond() - now.as_millisecond()) / 1_000;

        Some(Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d ", self.days)?;
        }

        if self.hours > 0 {
            write!(f, "{}h ", self.hours)?;
        }

        if self.minutes > 0 {
            write!(f, "{}m ", self.minutes)?;
        }

        write!(f, "{}s", self.seconds)
    }
}

/// Result of one countdown tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Countdown label for each product with an active discount.
    pub labels: Vec<(ProductId, String)>,

    /// Set when a discount that was active on the previous tick has lapsed.
    pub rerender: bool,
}

/// Tracks live countdowns across ticks.
#[derive(Debug, Default)]
pub struct CountdownBoard {
    active: HashSet<ProductId>,
}

impl CountdownBoard {
    /// A board with no active countdowns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute countdowns for `products` at `now`.
    pub fn tick(
        &mut self,
        products: impl IntoIterator<Item = ProductId>,
        discounts: &DiscountMapping,
        now: Timestamp,
    ) -> TickOutcome {
        let mut labels = Vec::new();
        let mut active = HashSet::new();

        for id in products {
            let Some(record) = discounts.active_for(id, now) else {
                continue;
            };

            let Some(remaining) = Remaining::until(record.expires_at(), now) else {
                continue;
            };

            active.insert(id);
            labels.push((id, remaining.to_string()));
        }

        let rerender = self.active.difference(&active).next().is_some();

        self.active = active;

        TickOutcome { labels, rerender }
    }

    /// Whether `id` had an active countdown on the last tick.
    pub fn is_active(&self, id: ProductId) -> bool {
        self.active.contains(&id)
    }
}
