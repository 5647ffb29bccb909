// giftfields/src/model/product.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ExtensionResult;
use crate::fields::{
    self, ADDITIONAL_INFO_ATTR, GIFT_ELIGIBLE_ATTR, GIFT_MESSAGE_DEFAULT_ATTR,
};
use crate::host::{self, ProductStore};

/// The typed bundle of product attributes this extension owns. Flags are
/// genuine booleans here; the host's `"yes"`/`"no"` convention appears only
/// inside [`load`](Self::load) and [`save`](Self::save).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub additional_information: String,
    pub gift_eligible: bool,
    pub gift_message_default: String,
}

impl ProductFields {
    pub async fn load(store: &dyn ProductStore, product_id: Uuid) -> ExtensionResult<Self> {
        let additional_information =
            host::read_attr(store, product_id, ADDITIONAL_INFO_ATTR).await?;
        let eligible_attr = host::read_attr(store, product_id, GIFT_ELIGIBLE_ATTR).await?;
        let gift_message_default =
            host::read_attr(store, product_id, GIFT_MESSAGE_DEFAULT_ATTR).await?;
        Ok(Self {
            additional_information,
            gift_eligible: fields::YesNo::from_attr(&eligible_attr).is_yes(),
            gift_message_default,
        })
    }

    pub async fn save(&self, store: &dyn ProductStore, product_id: Uuid) -> ExtensionResult<()> {
        host::write_attr(
            store,
            product_id,
            ADDITIONAL_INFO_ATTR,
            &self.additional_information,
        )
        .await?;
        host::write_attr(
            store,
            product_id,
            GIFT_ELIGIBLE_ATTR,
            fields::YesNo::from(self.gift_eligible).as_attr(),
        )
        .await?;
        host::write_attr(
            store,
            product_id,
            GIFT_MESSAGE_DEFAULT_ATTR,
            &self.gift_message_default,
        )
        .await
    }
}
