// demos/storefront_app/src/web/handlers/admin_handlers.rs

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use giftfields::markup::escape_html;
use giftfields::AdminColumns;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::page;

#[instrument(name = "handler::edit_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn edit_product_handler(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    let product = app_state.catalog.get(product_id).ok_or_else(|| {
        warn!("Product with ID {} not found.", product_id);
        AppError::NotFound(format!("Product with ID {} not found.", product_id))
    })?;

    // The extension contributes its field widgets from stored attributes.
    let mut widgets = String::new();
    app_state
        .hooks
        .render_admin_fields(product_id, &mut widgets)
        .await?;

    let body = format!(
        "<h1>Edit: {name}</h1>\n\
         <form method=\"post\" action=\"/admin/products/{id}\">\n\
         {widgets}\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        name = escape_html(&product.name),
        id = product.id,
        widgets = widgets,
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Edit product", &body)))
}

#[instrument(name = "handler::save_product", skip(app_state, path, form), fields(product_id = %path.as_ref()))]
pub async fn save_product_handler(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();

    if app_state.catalog.get(product_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Product with ID {} not found.",
            product_id
        )));
    }

    app_state
        .hooks
        .persist_fields(product_id, &form.into_inner())
        .await?;
    info!("Product {} fields saved.", product_id);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/admin/products/{}", product_id)))
        .finish())
}

#[instrument(name = "handler::orders_list", skip(app_state))]
pub async fn orders_list_handler(
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // Host columns first, then whatever the extensions register.
    let mut columns = AdminColumns::new();
    columns.register("order", "Order");
    columns.register("date", "Date");
    columns.register("items", "Items");
    app_state.hooks.register_admin_columns(&mut columns);

    let mut body = String::from("<h1>Orders</h1>\n<table border=\"1\">\n<tr>");
    for column in columns.columns() {
        body.push_str(&format!("<th>{}</th>", escape_html(&column.label)));
    }
    body.push_str("</tr>\n");

    for order in app_state.orders.list() {
        body.push_str("<tr>");
        for column in columns.columns() {
            let cell = match column.id.as_str() {
                "order" => order.id.to_string(),
                "date" => order.created_at.format("%Y-%m-%d %H:%M").to_string(),
                "items" => order.line_items().len().to_string(),
                // Extension cells arrive pre-escaped with their own inline
                // markup (line breaks between entries).
                id => app_state.hooks.render_admin_column(id, &order),
            };
            body.push_str(&format!("<td>{}</td>", cell));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Orders", &body)))
}
