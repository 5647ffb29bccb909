// giftfields/src/extension.rs

//! The one cohesive component behind every lifecycle event: admin field
//! editing, field persistence, storefront rendering, and the cart/order
//! propagation chain.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::ExtensionResult;
use crate::fields::{
    ADDITIONAL_INFO_ATTR, ADDITIONAL_INFO_LABEL, GIFT_CHECKBOX_FIELD, GIFT_CHECKBOX_LABEL,
    GIFT_ELIGIBLE_ATTR, GIFT_FLAG_META, GIFT_FLAG_YES, GIFT_MESSAGE_DEFAULT_ATTR,
    GIFT_MESSAGE_FIELD, GIFT_MESSAGE_LABEL, GIFT_MESSAGE_META, GIFT_ORDER_COLUMN,
    GIFT_ORDER_COLUMN_LABEL,
};
use crate::hooks::{AdminColumns, ItemDataRow, LifecycleHooks};
use crate::host::{FormInput, ProductStore};
use crate::markup::{self, escape_html};
use crate::model::{CartLine, GiftChoice, LineKey, Order, OrderLineItem, ProductFields};
use crate::sanitize::{sanitize_text_field, sanitize_textarea_field};

pub struct GiftFieldsExtension {
    products: Arc<dyn ProductStore>,
}

impl GiftFieldsExtension {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl LifecycleHooks for GiftFieldsExtension {
    async fn render_admin_fields(
        &self,
        product_id: Uuid,
        out: &mut String,
    ) -> ExtensionResult<()> {
        let fields = ProductFields::load(self.products.as_ref(), product_id).await?;
        markup::text_input(
            out,
            ADDITIONAL_INFO_ATTR,
            ADDITIONAL_INFO_LABEL,
            &fields.additional_information,
            "Please enter a message for the users",
        )?;
        markup::checkbox(out, GIFT_ELIGIBLE_ATTR, "Gift Eligible", fields.gift_eligible)?;
        markup::textarea(
            out,
            GIFT_MESSAGE_DEFAULT_ATTR,
            "Default Gift Message",
            &fields.gift_message_default,
            "Shown to customers as the starting gift message",
        )?;
        Ok(())
    }

    async fn persist_fields(&self, product_id: Uuid, form: &dyn FormInput) -> ExtensionResult<()> {
        // Unchecked checkboxes are absent from the submission, so absence
        // and false both normalize to "no".
        let fields = ProductFields {
            additional_information: sanitize_text_field(
                form.value(ADDITIONAL_INFO_ATTR).unwrap_or_default(),
            ),
            gift_eligible: form.is_present(GIFT_ELIGIBLE_ATTR),
            gift_message_default: sanitize_textarea_field(
                form.value(GIFT_MESSAGE_DEFAULT_ATTR).unwrap_or_default(),
            ),
        };
        debug!(%product_id, gift_eligible = fields.gift_eligible, "Persisting product fields.");
        fields.save(self.products.as_ref(), product_id).await
    }

    async fn render_storefront(&self, product_id: Uuid, out: &mut String) -> ExtensionResult<()> {
        let fields = ProductFields::load(self.products.as_ref(), product_id).await?;

        // Read path: an empty attribute renders nothing, not a placeholder.
        if !fields.additional_information.is_empty() {
            markup::info_block(
                out,
                "storefront-additional-info",
                ADDITIONAL_INFO_LABEL,
                &fields.additional_information,
            )?;
        }

        // Gift-capture path: always shown; gift_eligible does not gate it.
        write!(out, "<div class=\"storefront-gift-options\">")?;
        markup::checkbox(out, GIFT_CHECKBOX_FIELD, GIFT_CHECKBOX_LABEL, false)?;
        markup::textarea(
            out,
            GIFT_MESSAGE_FIELD,
            GIFT_MESSAGE_LABEL,
            &fields.gift_message_default,
            "Enter gift message",
        )?;
        write!(out, "</div>")?;
        Ok(())
    }

    async fn capture_cart_item(
        &self,
        form: &dyn FormInput,
        line: &mut CartLine,
    ) -> ExtensionResult<()> {
        if form.is_present(GIFT_CHECKBOX_FIELD) {
            let message = sanitize_textarea_field(form.value(GIFT_MESSAGE_FIELD).unwrap_or_default());
            let message = if message.is_empty() { None } else { Some(message) };
            debug!(product_id = %line.product_id, has_message = message.is_some(), "Capturing gift choice.");
            line.gift = Some(GiftChoice { message });
        }
        // Fresh key on every add-to-cart so equal-looking submissions stay
        // on separate lines.
        line.line_key = Some(LineKey::generate());
        Ok(())
    }

    fn render_cart_item(&self, line: &CartLine, rows: &mut Vec<ItemDataRow>) {
        if let Some(gift) = &line.gift {
            rows.push(ItemDataRow::new(GIFT_FLAG_META, GIFT_FLAG_YES));
            if let Some(message) = &gift.message {
                rows.push(ItemDataRow::new(GIFT_MESSAGE_META, message));
            }
        }
    }

    fn persist_order_line(&self, values: &CartLine, item: &mut OrderLineItem) {
        if let Some(gift) = &values.gift {
            item.add_meta(GIFT_FLAG_META, GIFT_FLAG_YES, true);
            if let Some(message) = &gift.message {
                item.add_meta(GIFT_MESSAGE_META, message, true);
            }
        }
    }

    fn register_admin_column(&self, columns: &mut AdminColumns) {
        columns.register(GIFT_ORDER_COLUMN, GIFT_ORDER_COLUMN_LABEL);
    }

    fn render_admin_column(&self, column_id: &str, order: &Order, out: &mut String) {
        if column_id != GIFT_ORDER_COLUMN {
            return;
        }
        // Every gift line item contributes a block; multi-gift orders list
        // them all rather than stopping at the first.
        let mut first = true;
        for item in order.line_items() {
            let flag = match item.meta_value(GIFT_FLAG_META) {
                Some(flag) if !flag.is_empty() => flag,
                _ => continue,
            };
            if !first {
                out.push_str("<br>");
            }
            first = false;
            out.push_str(&escape_html(flag));
            if let Some(message) = item.meta_value(GIFT_MESSAGE_META) {
                out.push_str("<br><strong>");
                out.push_str(&escape_html(GIFT_MESSAGE_META));
                out.push_str(":</strong> ");
                out.push_str(&escape_html(message));
            }
        }
    }
}
