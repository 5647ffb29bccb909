// giftfields/src/dispatch.rs

//! The startup-wired stand-in for the host's global callback table.
//!
//! Extensions register once; the host calls one dispatch method per
//! lifecycle event and the call fans out to every registered extension in
//! registration order. Holding the registry behind a lock keeps wiring and
//! dispatch decoupled the way the host's own table is.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{event, Level};
use uuid::Uuid;

use crate::error::ExtensionResult;
use crate::hooks::{AdminColumns, ItemDataRow, LifecycleHooks};
use crate::host::FormInput;
use crate::model::{CartLine, Order, OrderLineItem};

#[derive(Default)]
pub struct HookDispatch {
    hooks: RwLock<Vec<Arc<dyn LifecycleHooks>>>,
}

impl HookDispatch {
    /// Creates an empty dispatch table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension. Later registrations run after earlier ones.
    pub fn register(&self, hooks: Arc<dyn LifecycleHooks>) {
        event!(Level::DEBUG, "Registering lifecycle hooks.");
        self.hooks.write().push(hooks);
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.read().is_empty()
    }

    // The guard is cloned out before any await; parking_lot guards must not
    // cross suspension points.
    fn registered(&self) -> Vec<Arc<dyn LifecycleHooks>> {
        self.hooks.read().clone()
    }

    pub async fn render_admin_fields(
        &self,
        product_id: Uuid,
        out: &mut String,
    ) -> ExtensionResult<()> {
        for hooks in self.registered() {
            hooks.render_admin_fields(product_id, out).await?;
        }
        Ok(())
    }

    pub async fn persist_fields(
        &self,
        product_id: Uuid,
        form: &dyn FormInput,
    ) -> ExtensionResult<()> {
        event!(Level::DEBUG, %product_id, "Dispatching persist_fields.");
        for hooks in self.registered() {
            hooks.persist_fields(product_id, form).await?;
        }
        Ok(())
    }

    pub async fn render_storefront(
        &self,
        product_id: Uuid,
        out: &mut String,
    ) -> ExtensionResult<()> {
        for hooks in self.registered() {
            hooks.render_storefront(product_id, out).await?;
        }
        Ok(())
    }

    pub async fn capture_cart_item(
        &self,
        form: &dyn FormInput,
        line: &mut CartLine,
    ) -> ExtensionResult<()> {
        event!(Level::DEBUG, product_id = %line.product_id, "Dispatching capture_cart_item.");
        for hooks in self.registered() {
            hooks.capture_cart_item(form, line).await?;
        }
        Ok(())
    }

    pub fn render_cart_item(&self, line: &CartLine) -> Vec<ItemDataRow> {
        let mut rows = Vec::new();
        for hooks in self.registered() {
            hooks.render_cart_item(line, &mut rows);
        }
        rows
    }

    pub fn persist_order_line(&self, values: &CartLine, item: &mut OrderLineItem) {
        event!(Level::DEBUG, product_id = %values.product_id, "Dispatching persist_order_line.");
        for hooks in self.registered() {
            hooks.persist_order_line(values, item);
        }
    }

    /// Runs every extension's column registration over `columns`, which the
    /// host has already seeded with its own columns.
    pub fn register_admin_columns(&self, columns: &mut AdminColumns) {
        for hooks in self.registered() {
            hooks.register_admin_column(columns);
        }
    }

    pub fn render_admin_column(&self, column_id: &str, order: &Order) -> String {
        let mut out = String::new();
        for hooks in self.registered() {
            hooks.render_admin_column(column_id, order, &mut out);
        }
        out
    }
}
