// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use giftfields::fields::{GIFT_CHECKBOX_FIELD, GIFT_MESSAGE_FIELD, GIFT_ORDER_COLUMN};
use giftfields::{
    AdminColumns, Cart, CartLine, FormData, GiftFieldsExtension, HookDispatch, MemoryProductStore,
    Order, OrderLineItem,
};
use tracing::Level;
use uuid::Uuid;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer() // Important for tests to capture output
        .try_init()
        .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
    Lazy::force(&TRACING_INIT);
}

// --- Host-in-miniature used by every scenario ---

pub struct Harness {
    pub products: Arc<MemoryProductStore>,
    pub dispatch: HookDispatch,
}

pub fn harness() -> Harness {
    let products = Arc::new(MemoryProductStore::new());
    let dispatch = HookDispatch::new();
    dispatch.register(Arc::new(GiftFieldsExtension::new(products.clone())));
    Harness { products, dispatch }
}

/// A storefront submission with the gift box checked. An empty message is
/// still a submitted (but blank) textarea.
pub fn gift_form(message: &str) -> FormData {
    FormData::new()
        .with(GIFT_CHECKBOX_FIELD, "yes")
        .with(GIFT_MESSAGE_FIELD, message)
}

/// A storefront submission with the gift box unchecked: the checkbox field
/// is absent entirely, the textarea still posts.
pub fn plain_form() -> FormData {
    FormData::new().with(GIFT_MESSAGE_FIELD, "")
}

pub async fn add_to_cart(
    harness: &Harness,
    cart: &mut Cart,
    product_id: Uuid,
    quantity: u32,
    form: &FormData,
) {
    let mut line = CartLine::new(product_id, quantity);
    harness
        .dispatch
        .capture_cart_item(form, &mut line)
        .await
        .expect("capture_cart_item");
    cart.add_line(line);
}

/// Checkout as the host performs it: snapshot every cart line into an order
/// line item, fire the order-line hook, empty the cart.
pub fn checkout(harness: &Harness, cart: &mut Cart) -> Order {
    let mut order = Order::new();
    for line in cart.lines() {
        let mut item = OrderLineItem::from_cart_line(line);
        harness.dispatch.persist_order_line(line, &mut item);
        order.push_line_item(item);
    }
    cart.clear();
    order
}

/// The admin order list's gift cell for one order.
pub fn gift_cell(harness: &Harness, order: &Order) -> String {
    harness.dispatch.render_admin_column(GIFT_ORDER_COLUMN, order)
}

/// Columns as the admin list sees them after extension registration, seeded
/// with the host's own columns first.
pub fn admin_columns(harness: &Harness) -> AdminColumns {
    let mut columns = AdminColumns::new();
    columns.register("order", "Order");
    columns.register("date", "Date");
    harness.dispatch.register_admin_columns(&mut columns);
    columns
}
