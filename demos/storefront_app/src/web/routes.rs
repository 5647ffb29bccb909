// demos/storefront_app/src/web/routes.rs

use actix_web::web;

// Simple health check handler; the storefront has no critical backing
// services to probe.
async fn health_check_handler() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health Check Route
        .route("/health", web::get().to(health_check_handler))
        // JSON catalog API
        .service(web::scope("/api/v1").route(
            "/products",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
        ))
        // Storefront
        .route(
            "/",
            web::get().to(crate::web::handlers::product_handlers::storefront_index_handler),
        )
        .service(web::scope("/products").route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::product_page_handler),
        ))
        // Cart Routes (session comes from the X-Session-ID header)
        .service(
            web::scope("/cart")
                .route(
                    "",
                    web::get().to(crate::web::handlers::cart_handlers::view_cart_handler),
                )
                .route(
                    "/add",
                    web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
                ),
        )
        // Checkout Route
        .route(
            "/checkout",
            web::post().to(crate::web::handlers::checkout_handlers::place_order_handler),
        )
        // Admin surfaces: product field editing and the order list
        .service(
            web::scope("/admin")
                .route(
                    "/products/{product_id}",
                    web::get().to(crate::web::handlers::admin_handlers::edit_product_handler),
                )
                .route(
                    "/products/{product_id}",
                    web::post().to(crate::web::handlers::admin_handlers::save_product_handler),
                )
                .route(
                    "/orders",
                    web::get().to(crate::web::handlers::admin_handlers::orders_list_handler),
                ),
        );
}
