// giftfields/src/host/mod.rs

//! Seams onto the host framework. The extension never owns storage or
//! request parsing; it consumes these interfaces and the host (or the
//! in-memory stand-ins in [`memory`]) provides them.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{ExtensionError, ExtensionResult};

pub use memory::{FormData, MemoryProductStore};

/// Key-value attribute storage keyed by product id and attribute name.
///
/// Reads of unset attributes yield the empty string, never an error; errors
/// are reserved for genuine storage failures.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn attribute(&self, product_id: Uuid, key: &str) -> anyhow::Result<String>;

    async fn set_attribute(&self, product_id: Uuid, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Read-only access to the current request's submitted field values.
/// Every field is presence-optional; an unchecked checkbox is simply absent.
pub trait FormInput: Send + Sync {
    fn value(&self, field: &str) -> Option<&str>;

    fn is_present(&self, field: &str) -> bool {
        self.value(field).is_some()
    }
}

impl FormInput for std::collections::HashMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(|v| v.as_str())
    }
}

impl FormInput for std::collections::BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(|v| v.as_str())
    }
}

pub(crate) async fn read_attr(
    store: &dyn ProductStore,
    product_id: Uuid,
    key: &str,
) -> ExtensionResult<String> {
    store
        .attribute(product_id, key)
        .await
        .map_err(|source| ExtensionError::Store {
            attribute: key.to_string(),
            source,
        })
}

pub(crate) async fn write_attr(
    store: &dyn ProductStore,
    product_id: Uuid,
    key: &str,
    value: &str,
) -> ExtensionResult<()> {
    store
        .set_attribute(product_id, key, value)
        .await
        .map_err(|source| ExtensionError::Store {
            attribute: key.to_string(),
            source,
        })
}
