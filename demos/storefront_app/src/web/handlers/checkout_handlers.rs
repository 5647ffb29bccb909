// demos/storefront_app/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use giftfields::markup::escape_html;
use giftfields::{Order, OrderLineItem};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::cart_handlers::CartSession;
use crate::web::page;

#[instrument(
    name = "handler::place_order",
    skip(app_state, session),
    fields(session_id = %session.id)
)]
pub async fn place_order_handler(
    app_state: web::Data<AppState>,
    session: CartSession,
) -> Result<HttpResponse, AppError> {
    let cart = app_state.carts.take(&session.id);
    if cart.is_empty() {
        warn!("Checkout attempted with an empty cart.");
        return Err(AppError::Validation(
            "Cannot place an order with an empty cart.".to_string(),
        ));
    }

    // Freeze each cart line into an order line item; the extension attaches
    // its gift metadata before the item lands on the order.
    let mut order = Order::new();
    for line in cart.lines() {
        let mut item = OrderLineItem::from_cart_line(line);
        app_state.hooks.persist_order_line(line, &mut item);
        order.push_line_item(item);
    }

    info!(
        "Order {} placed with {} line item(s).",
        order.id,
        order.line_items().len()
    );

    // Confirmation page: the customer-facing order view, which shows only
    // customer-visible metadata.
    let mut body = format!("<h1>Order placed</h1>\n<p>Order ID: {}</p>\n<ul>", order.id);
    for item in order.line_items() {
        let name = app_state
            .catalog
            .get(item.product_id)
            .map(|p| p.name)
            .unwrap_or_else(|| item.product_id.to_string());
        body.push_str(&format!(
            "<li>{name} &times; {quantity}",
            name = escape_html(&name),
            quantity = item.quantity,
        ));
        let visible: Vec<_> = item.customer_visible_meta().collect();
        if !visible.is_empty() {
            body.push_str("<dl>");
            for meta in visible {
                body.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>",
                    escape_html(&meta.key),
                    escape_html(&meta.value),
                ));
            }
            body.push_str("</dl>");
        }
        body.push_str("</li>");
    }
    body.push_str("</ul>");

    app_state.orders.push(order);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Order placed", &body)))
}
