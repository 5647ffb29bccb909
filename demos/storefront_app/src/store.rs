// demos/storefront_app/src/store.rs

//! The host's own storage: catalog, session carts, and placed orders, all
//! in-memory. Persistence is the host's concern in a real deployment; the
//! extension only ever sees the interfaces, never these containers.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use giftfields::{Cart, CartLine, Order, ProductFields, ProductStore};

use crate::errors::Result;
use crate::models::CatalogProduct;

#[derive(Default)]
pub struct Catalog {
    products: RwLock<Vec<CatalogProduct>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: CatalogProduct) {
        self.products.write().push(product);
    }

    pub fn list(&self) -> Vec<CatalogProduct> {
        self.products.read().clone()
    }

    pub fn get(&self, product_id: Uuid) -> Option<CatalogProduct> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }
}

/// One cart per session id. Lines go through the cart's merge-by-equality
/// add semantics; the extension's line keys are what keep gift submissions
/// on separate lines.
#[derive(Default)]
pub struct SessionCarts {
    carts: RwLock<HashMap<String, Cart>>,
}

impl SessionCarts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&self, session_id: &str, line: CartLine) {
        self.carts
            .write()
            .entry(session_id.to_string())
            .or_default()
            .add_line(line);
    }

    pub fn snapshot(&self, session_id: &str) -> Cart {
        self.carts
            .read()
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Empties the session's cart and returns what it held, for checkout.
    pub fn take(&self, session_id: &str) -> Cart {
        self.carts.write().remove(session_id).unwrap_or_default()
    }
}

#[derive(Default)]
pub struct OrderBook {
    orders: RwLock<Vec<Order>>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, order: Order) {
        self.orders.write().push(order);
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.read().clone()
    }
}

/// Seeds a browsable catalog, including extension attributes on the first
/// product so the storefront widgets have something to show.
pub async fn seed_catalog(catalog: &Catalog, products: &dyn ProductStore) -> Result<()> {
    let chess = CatalogProduct::new(
        "Walnut Chess Set",
        Some("Hand-carved pieces with a folding board."),
        8900,
    );
    let fields = ProductFields {
        additional_information: "Ships in a plain brown box within 3 days.".to_string(),
        gift_eligible: true,
        gift_message_default: "Thinking of you!".to_string(),
    };
    fields.save(products, chess.id).await?;
    catalog.insert(chess);

    catalog.insert(CatalogProduct::new(
        "Linen Tote Bag",
        Some("Natural linen, reinforced straps."),
        2400,
    ));

    tracing::info!("Catalog seeded with demo products.");
    Ok(())
}
