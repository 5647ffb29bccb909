// demos/storefront_app/src/web/mod.rs

pub mod handlers;
pub mod routes;

use giftfields::markup::escape_html;

/// Minimal page shell shared by every HTML surface. `body` is trusted
/// markup assembled by the handlers; dynamic values inside it are escaped
/// at their interpolation sites.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}\n</body>\n</html>",
        title = escape_html(title),
        body = body,
    )
}
