// giftfields/src/hooks.rs

//! The lifecycle surface between the host and an extension.
//!
//! The host framework's callback registration is a global dispatch table in
//! disguise; here it is an explicit trait with one method per lifecycle
//! event, implemented by one cohesive component and wired into a
//! [`HookDispatch`](crate::dispatch::HookDispatch) at startup.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ExtensionResult;
use crate::host::FormInput;
use crate::model::{CartLine, Order, OrderLineItem};

/// One display row appended to a cart or checkout review line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDataRow {
    pub name: String,
    pub value: String,
}

impl ItemDataRow {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// A column registered on the admin order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminColumn {
    pub id: String,
    pub label: String,
}

/// Ordered registry of admin order-list columns. The host seeds its own
/// columns and passes this to every extension's registration hook.
#[derive(Debug, Clone, Default)]
pub struct AdminColumns {
    columns: Vec<AdminColumn>,
}

impl AdminColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, label: &str) {
        self.columns.push(AdminColumn {
            id: id.to_string(),
            label: label.to_string(),
        });
    }

    pub fn columns(&self) -> &[AdminColumn] {
        &self.columns
    }
}

/// One method per host lifecycle event. Methods that never touch host
/// storage are synchronous; the rest are async because the stores are.
#[async_trait]
pub trait LifecycleHooks: Send + Sync {
    /// Product-edit screen: render the extension's input widgets from the
    /// product's stored attribute values. Purely presentational.
    async fn render_admin_fields(&self, product_id: Uuid, out: &mut String)
        -> ExtensionResult<()>;

    /// Product save: sanitize the submitted values and write them as product
    /// attributes. Malformed input is coerced, never rejected.
    async fn persist_fields(&self, product_id: Uuid, form: &dyn FormInput) -> ExtensionResult<()>;

    /// Single-product page: render the stored info block (if any) and the
    /// gift-capture controls ahead of the add-to-cart control.
    async fn render_storefront(&self, product_id: Uuid, out: &mut String) -> ExtensionResult<()>;

    /// Add-to-cart: move the submitted gift choice onto the new cart line
    /// and attach a fresh anti-merge line key.
    async fn capture_cart_item(
        &self,
        form: &dyn FormInput,
        line: &mut CartLine,
    ) -> ExtensionResult<()>;

    /// Cart/checkout review: project the line's gift annotation into
    /// display rows. No mutation.
    fn render_cart_item(&self, line: &CartLine, rows: &mut Vec<ItemDataRow>);

    /// Order creation: freeze the checkout-time gift values into the order
    /// line's metadata.
    fn persist_order_line(&self, values: &CartLine, item: &mut OrderLineItem);

    /// Admin order list: contribute columns.
    fn register_admin_column(&self, columns: &mut AdminColumns);

    /// Admin order list: render this extension's cell for one order and one
    /// registered column id. Unknown ids must render nothing.
    fn render_admin_column(&self, column_id: &str, order: &Order, out: &mut String);
}
