// src/lib.rs

//! Giftfields: gift options and info-field propagation for storefront hosts.
//!
//! The crate attaches a free-text "additional information" field and a gift
//! option (checkbox + message) to products, and carries those values through
//! the host's surfaces:
//!  - the product-edit screen (render + sanitize-and-persist),
//!  - the single-product page (info display + gift capture controls),
//!  - the cart (line annotation with an anti-merge key, review rows),
//!  - checkout (customer-visible order-line metadata),
//!  - the admin order list (a "Send as Gift" column).
//!
//! The host's callback registration is modeled as one explicit trait,
//! [`LifecycleHooks`], with one method per lifecycle event, implemented by
//! [`GiftFieldsExtension`] and wired into a [`HookDispatch`] at startup.
//! Host storage and request parsing stay behind the seams in [`host`].

pub mod dispatch;
pub mod error;
pub mod extension;
pub mod fields;
pub mod hooks;
pub mod host;
pub mod markup;
pub mod model;
pub mod sanitize;

// --- Re-exports for the Public API ---

pub use crate::dispatch::HookDispatch;
pub use crate::error::{ExtensionError, ExtensionResult};
pub use crate::extension::GiftFieldsExtension;
pub use crate::fields::YesNo;
pub use crate::hooks::{AdminColumn, AdminColumns, ItemDataRow, LifecycleHooks};
pub use crate::host::{FormData, FormInput, MemoryProductStore, ProductStore};
pub use crate::model::{Cart, CartLine, GiftChoice, LineKey, Order, OrderLineItem, ProductFields};

/*
    Core flow:
    1. Build a `HookDispatch` and register a `GiftFieldsExtension` over the
       host's `ProductStore` at startup.
    2. On the product-edit screen, call `render_admin_fields`; on save, call
       `persist_fields` with the submitted form.
    3. On the single-product page, call `render_storefront` inside the
       add-to-cart form, ahead of the submit control.
    4. On add-to-cart, build a `CartLine` and pass it through
       `capture_cart_item`, then `Cart::add_line` it.
    5. On cart/checkout review, append `render_cart_item` rows per line.
    6. At checkout, snapshot each line with `OrderLineItem::from_cart_line`
       and run `persist_order_line` before pushing it onto the `Order`.
    7. In the admin list, seed `AdminColumns`, run `register_admin_columns`,
       and render cells with `render_admin_column`.
*/
