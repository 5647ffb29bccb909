// demos/storefront_app/src/web/handlers/cart_handlers.rs

use std::collections::HashMap;

use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use tracing::{info, instrument};
use uuid::Uuid;

use giftfields::markup::escape_html;
use giftfields::CartLine;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::page;

// --- Session Extractor ---
// The host identifies a shopping session by the X-Session-ID header. A
// browser without one falls back to a shared "guest" session, which is
// enough for a demo host; a real deployment would mint session cookies.
#[derive(Debug)]
pub struct CartSession {
    pub id: String,
}

impl FromRequest for CartSession {
    type Error = AppError;
    type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let id = req
            .headers()
            .get("X-Session-ID")
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .unwrap_or("guest")
            .to_string();
        futures_util::future::ready(Ok(CartSession { id }))
    }
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, form, session),
    fields(session_id = %session.id)
)]
pub async fn add_to_cart_handler(
    app_state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
    session: CartSession,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let product_id = form
        .get("product_id")
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or_else(|| AppError::Validation("A valid product_id is required.".to_string()))?;
    let quantity = match form.get("quantity") {
        Some(q) => q
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| AppError::Validation("Quantity must be a positive number.".to_string()))?,
        None => 1,
    };

    if app_state.catalog.get(product_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Product with ID {} not found.",
            product_id
        )));
    }

    // The submitted form doubles as the extension's FormInput: the gift
    // checkbox and message fields ride along with product_id and quantity.
    let mut line = CartLine::new(product_id, quantity);
    app_state.hooks.capture_cart_item(&form, &mut line).await?;
    app_state.carts.add_line(&session.id, line);

    info!(
        "Added product {} (quantity {}) to cart for session {}.",
        product_id, quantity, session.id
    );

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/cart"))
        .finish())
}

#[instrument(name = "handler::view_cart", skip(app_state, session), fields(session_id = %session.id))]
pub async fn view_cart_handler(
    app_state: web::Data<AppState>,
    session: CartSession,
) -> Result<HttpResponse, AppError> {
    let cart = app_state.carts.snapshot(&session.id);

    if cart.is_empty() {
        return Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page("Cart", "<h1>Cart</h1>\n<p>Your cart is empty.</p>")));
    }

    let mut body = String::from("<h1>Cart</h1>\n<ul>");
    for line in cart.lines() {
        let name = app_state
            .catalog
            .get(line.product_id)
            .map(|p| p.name)
            .unwrap_or_else(|| line.product_id.to_string());
        body.push_str(&format!(
            "<li>{name} &times; {quantity}",
            name = escape_html(&name),
            quantity = line.quantity,
        ));

        // Extension rows: the gift flag and message for gift lines.
        let rows = app_state.hooks.render_cart_item(line);
        if !rows.is_empty() {
            body.push_str("<dl>");
            for row in rows {
                body.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>",
                    escape_html(&row.name),
                    escape_html(&row.value),
                ));
            }
            body.push_str("</dl>");
        }
        body.push_str("</li>");
    }
    body.push_str(
        "</ul>\n<form method=\"post\" action=\"/checkout\">\
         <button type=\"submit\">Place order</button></form>",
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Cart", &body)))
}
