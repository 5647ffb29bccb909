// giftfields/examples/basic_flow.rs

use std::sync::Arc;

use giftfields::fields::{
    ADDITIONAL_INFO_ATTR, GIFT_CHECKBOX_FIELD, GIFT_MESSAGE_DEFAULT_ATTR, GIFT_MESSAGE_FIELD,
    GIFT_ORDER_COLUMN,
};
use giftfields::{
    AdminColumns, Cart, CartLine, FormData, GiftFieldsExtension, HookDispatch, MemoryProductStore,
    Order, OrderLineItem,
};
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    info!("--- Giftfields Basic Flow Example ---");

    // 1. Wire the extension into the dispatch table, the way a host does at
    // startup.
    let products = Arc::new(MemoryProductStore::new());
    let dispatch = HookDispatch::new();
    dispatch.register(Arc::new(GiftFieldsExtension::new(products.clone())));

    // 2. The merchant saves the product-edit form.
    let product_id = Uuid::new_v4();
    let admin_form = FormData::new()
        .with(ADDITIONAL_INFO_ATTR, "Ships in a plain brown box.")
        .with(GIFT_MESSAGE_DEFAULT_ATTR, "Thinking of you!");
    dispatch.persist_fields(product_id, &admin_form).await?;
    info!("Product fields saved.");

    // 3. The storefront renders the product page widgets.
    let mut page = String::new();
    dispatch.render_storefront(product_id, &mut page).await?;
    info!("Storefront widgets:\n{}", page);

    // 4. A customer checks the gift box and adds the product to the cart.
    let submission = FormData::new()
        .with(GIFT_CHECKBOX_FIELD, "yes")
        .with(GIFT_MESSAGE_FIELD, "Happy Birthday!");
    let mut cart = Cart::new();
    let mut line = CartLine::new(product_id, 1);
    dispatch.capture_cart_item(&submission, &mut line).await?;
    cart.add_line(line);

    for row in dispatch.render_cart_item(&cart.lines()[0]) {
        info!("Cart review row: {}: {}", row.name, row.value);
    }

    // 5. Checkout freezes the cart into an order.
    let mut order = Order::new();
    for line in cart.lines() {
        let mut item = OrderLineItem::from_cart_line(line);
        dispatch.persist_order_line(line, &mut item);
        order.push_line_item(item);
    }
    cart.clear();

    // 6. The admin order list shows the gift column.
    let mut columns = AdminColumns::new();
    columns.register("order", "Order");
    dispatch.register_admin_columns(&mut columns);
    let labels: Vec<_> = columns.columns().iter().map(|c| c.label.as_str()).collect();
    info!("Admin columns: {:?}", labels);
    info!(
        "Gift cell for order {}: {}",
        order.id,
        dispatch.render_admin_column(GIFT_ORDER_COLUMN, &order)
    );

    Ok(())
}
