// demos/storefront_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use giftfields::markup::escape_html;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::page;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let products = app_state.catalog.list();
    info!("Successfully fetched {} products.", products.len());

    Ok(HttpResponse::Ok().json(json!({
        "message": "Products fetched successfully.",
        "products": products
    })))
}

#[instrument(name = "handler::storefront_index", skip(app_state))]
pub async fn storefront_index_handler(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut body = String::from("<h1>Storefront</h1>\n<ul>");
    for product in app_state.catalog.list() {
        body.push_str(&format!(
            "<li><a href=\"/products/{id}\">{name}</a> {price}</li>",
            id = product.id,
            name = escape_html(&product.name),
            price = product.display_price(),
        ));
    }
    body.push_str("</ul>");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Storefront", &body)))
}

#[instrument(name = "handler::product_page", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn product_page_handler(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let product = app_state.catalog.get(product_id).ok_or_else(|| {
        warn!("Product with ID {} not found.", product_id);
        AppError::NotFound(format!("Product with ID {} not found.", product_id))
    })?;

    // The extension's widgets: the info block plus the gift controls. They
    // go inside the form, ahead of the add-to-cart button.
    let mut widgets = String::new();
    app_state
        .hooks
        .render_storefront(product_id, &mut widgets)
        .await?;

    let mut body = format!(
        "<h1>{name}</h1>\n<p class=\"price\">{price}</p>\n",
        name = escape_html(&product.name),
        price = product.display_price(),
    );
    if let Some(description) = &product.description {
        body.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"/cart/add\">\n\
         <input type=\"hidden\" name=\"product_id\" value=\"{id}\">\n\
         <label>Quantity <input type=\"number\" name=\"quantity\" value=\"1\" min=\"1\"></label>\n\
         {widgets}\n\
         <button type=\"submit\">Add to cart</button>\n\
         </form>",
        id = product.id,
        widgets = widgets,
    ));

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page(&product.name, &body)))
}
