// giftfields/src/host/memory.rs

//! In-memory stand-ins for the host's stores, shared by the demo app and
//! the test suites. Locks are internal and never held across awaits.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{FormInput, ProductStore};

/// Product attribute storage backed by a map. Unset reads yield the empty
/// string, matching the host's contract.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    attributes: RwLock<HashMap<(Uuid, String), String>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn attribute(&self, product_id: Uuid, key: &str) -> anyhow::Result<String> {
        let attributes = self.attributes.read();
        Ok(attributes
            .get(&(product_id, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_attribute(&self, product_id: Uuid, key: &str, value: &str) -> anyhow::Result<()> {
        self.attributes
            .write()
            .insert((product_id, key.to_string()), value.to_string());
        Ok(())
    }
}

/// A submitted form built up field by field. Checkbox semantics fall out of
/// the map: an unchecked box is a field that was never inserted.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.to_string(), value.to_string());
        self
    }
}

impl FormInput for FormData {
    fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_attribute_reads_as_empty_string() {
        let store = MemoryProductStore::new();
        let value = store.attribute(Uuid::new_v4(), "anything").await.unwrap();
        assert_eq!(value, "");
    }

    #[tokio::test]
    async fn attributes_round_trip() {
        let store = MemoryProductStore::new();
        let id = Uuid::new_v4();
        store.set_attribute(id, "k", "v").await.unwrap();
        assert_eq!(store.attribute(id, "k").await.unwrap(), "v");
    }

    #[test]
    fn absent_form_field_is_not_present() {
        let form = FormData::new().with("present", "yes");
        assert!(form.is_present("present"));
        assert!(!form.is_present("absent"));
    }
}
