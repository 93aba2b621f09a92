//! Vitrina prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, Logo, MediaItem, MediaKind, Product, ProductId},
    countdown::{CountdownBoard, Remaining, TICK_INTERVAL, TickOutcome},
    discounts::{DiscountError, DiscountMapping, DiscountRecord},
    gesture::{
        AdminGesture, AdminModal, GESTURE_WINDOW, GestureOutcome, GestureRegion, GestureState,
        VerifyResult, is_admin_shortcut,
    },
    modal::ModalView,
    order::{OrderError, order_message, whatsapp_digits},
    prices::{ParsedPrice, PriceParseError, format_amount, parse_price},
    pricing::{PriceInfo, PriceLabel, discounted_amount, price_info},
};
