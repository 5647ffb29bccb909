// tests/persistence_tests.rs
mod common;

use common::*;
use giftfields::fields::{
    ADDITIONAL_INFO_ATTR, GIFT_ELIGIBLE_ATTR, GIFT_MESSAGE_DEFAULT_ATTR,
};
use giftfields::{FormData, ProductFields, ProductStore};
use uuid::Uuid;

#[tokio::test]
async fn save_sanitizes_and_stores_every_field() {
    setup_tracing();
    let harness = harness();
    let product_id = Uuid::new_v4();

    let form = FormData::new()
        .with(ADDITIONAL_INFO_ATTR, "  Ships <b>within</b> 3 days  ")
        .with(GIFT_ELIGIBLE_ATTR, "yes")
        .with(GIFT_MESSAGE_DEFAULT_ATTR, "Dear friend,\r\n<i>enjoy</i>!");

    harness
        .dispatch
        .persist_fields(product_id, &form)
        .await
        .unwrap();

    let fields = ProductFields::load(harness.products.as_ref(), product_id)
        .await
        .unwrap();
    assert_eq!(fields.additional_information, "Ships within 3 days");
    assert!(fields.gift_eligible);
    assert_eq!(fields.gift_message_default, "Dear friend,\nenjoy!");
}

#[tokio::test]
async fn absent_checkbox_persists_as_no() {
    setup_tracing();
    let harness = harness();
    let product_id = Uuid::new_v4();

    // The host drops unchecked checkboxes from the submission, so this form
    // is what "unchecked" actually looks like.
    let form = FormData::new().with(ADDITIONAL_INFO_ATTR, "note");
    harness
        .dispatch
        .persist_fields(product_id, &form)
        .await
        .unwrap();

    assert_eq!(
        harness
            .products
            .attribute(product_id, GIFT_ELIGIBLE_ATTR)
            .await
            .unwrap(),
        "no"
    );
}

#[tokio::test]
async fn absent_fields_persist_as_empty_strings() {
    setup_tracing();
    let harness = harness();
    let product_id = Uuid::new_v4();

    harness
        .dispatch
        .persist_fields(product_id, &FormData::new())
        .await
        .unwrap();

    let fields = ProductFields::load(harness.products.as_ref(), product_id)
        .await
        .unwrap();
    assert_eq!(fields, ProductFields::default());
}

#[tokio::test]
async fn resaving_stored_values_does_not_drift() {
    setup_tracing();
    let harness = harness();
    let product_id = Uuid::new_v4();

    let form = FormData::new().with(ADDITIONAL_INFO_ATTR, "a <script>b</script> c");
    harness
        .dispatch
        .persist_fields(product_id, &form)
        .await
        .unwrap();
    let first = ProductFields::load(harness.products.as_ref(), product_id)
        .await
        .unwrap();

    // Round-trip the stored value through another save, as a host re-submit
    // of the edit form would.
    let resubmit = FormData::new().with(ADDITIONAL_INFO_ATTR, &first.additional_information);
    harness
        .dispatch
        .persist_fields(product_id, &resubmit)
        .await
        .unwrap();
    let second = ProductFields::load(harness.products.as_ref(), product_id)
        .await
        .unwrap();

    assert_eq!(first.additional_information, second.additional_information);
}
