// giftfields/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::cart::CartLine;

/// A named key/value pair attached to an order line. `customer_visible`
/// controls whether the customer-facing order view shows the entry, not
/// whether it is stored.
#[derive(Debug, Clone, Serialize)]
pub struct ItemMeta {
    pub key: String,
    pub value: String,
    pub customer_visible: bool,
}

/// The persisted, checkout-time snapshot of a cart line, attached to a
/// placed order. Metadata is append-only; nothing in this crate edits an
/// entry after it is written.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLineItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    meta: Vec<ItemMeta>,
}

impl OrderLineItem {
    /// Snapshots the product and quantity. Gift metadata is attached
    /// separately by the order-line lifecycle hook.
    pub fn from_cart_line(line: &CartLine) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: line.product_id,
            quantity: line.quantity,
            meta: Vec::new(),
        }
    }

    pub fn add_meta(&mut self, key: &str, value: &str, customer_visible: bool) {
        self.meta.push(ItemMeta {
            key: key.to_string(),
            value: value.to_string(),
            customer_visible,
        });
    }

    /// First stored value under `key`, if any.
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    pub fn meta_entries(&self) -> &[ItemMeta] {
        &self.meta
    }

    pub fn customer_visible_meta(&self) -> impl Iterator<Item = &ItemMeta> {
        self.meta.iter().filter(|m| m.customer_visible)
    }
}

/// A placed order: line items frozen at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    line_items: Vec<OrderLineItem>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            line_items: Vec::new(),
        }
    }

    pub fn push_line_item(&mut self, item: OrderLineItem) {
        self.line_items.push(item);
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cart::CartLine;

    #[test]
    fn snapshot_copies_product_and_quantity_without_meta() {
        let line = CartLine::new(Uuid::new_v4(), 3);
        let item = OrderLineItem::from_cart_line(&line);
        assert_eq!(item.product_id, line.product_id);
        assert_eq!(item.quantity, 3);
        assert!(item.meta_entries().is_empty());
    }

    #[test]
    fn meta_lookup_returns_first_match() {
        let mut item = OrderLineItem::from_cart_line(&CartLine::new(Uuid::new_v4(), 1));
        item.add_meta("k", "first", true);
        item.add_meta("k", "second", true);
        assert_eq!(item.meta_value("k"), Some("first"));
        assert_eq!(item.meta_value("missing"), None);
    }

    #[test]
    fn visibility_flag_filters_customer_view() {
        let mut item = OrderLineItem::from_cart_line(&CartLine::new(Uuid::new_v4(), 1));
        item.add_meta("shown", "v", true);
        item.add_meta("hidden", "v", false);
        let visible: Vec<_> = item.customer_visible_meta().map(|m| m.key.as_str()).collect();
        assert_eq!(visible, vec!["shown"]);
    }
}
