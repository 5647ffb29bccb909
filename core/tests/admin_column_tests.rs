// tests/admin_column_tests.rs
mod common;

use common::*;
use giftfields::fields::GIFT_ORDER_COLUMN;
use giftfields::Cart;
use uuid::Uuid;

#[tokio::test]
async fn gift_column_registers_after_host_columns() {
    setup_tracing();
    let harness = harness();

    let columns = admin_columns(&harness);
    let ids: Vec<_> = columns.columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["order", "date", GIFT_ORDER_COLUMN]);
    assert_eq!(columns.columns()[2].label, "Send as Gift");
}

#[tokio::test]
async fn cell_is_blank_for_orders_without_gifts() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 2, &plain_form()).await;
    let order = checkout(&harness, &mut cart);

    assert_eq!(gift_cell(&harness, &order), "");
}

#[tokio::test]
async fn cell_shows_flag_and_message_on_its_own_line() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    add_to_cart(
        &harness,
        &mut cart,
        Uuid::new_v4(),
        1,
        &gift_form("Happy Birthday!"),
    )
    .await;
    let order = checkout(&harness, &mut cart);

    assert_eq!(
        gift_cell(&harness, &order),
        "Yes<br><strong>Gift Message:</strong> Happy Birthday!"
    );
}

#[tokio::test]
async fn cell_omits_the_message_line_when_no_message_was_left() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &gift_form("")).await;
    let order = checkout(&harness, &mut cart);

    assert_eq!(gift_cell(&harness, &order), "Yes");
}

#[tokio::test]
async fn cell_aggregates_every_gift_line_item() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &gift_form("For Ana")).await;
    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &plain_form()).await;
    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &gift_form("For Ben")).await;
    let order = checkout(&harness, &mut cart);

    assert_eq!(
        gift_cell(&harness, &order),
        "Yes<br><strong>Gift Message:</strong> For Ana\
         <br>Yes<br><strong>Gift Message:</strong> For Ben"
    );
}

#[tokio::test]
async fn message_text_is_escaped_in_the_cell() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    // The sanitizer strips tags but keeps characters like & intact.
    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &gift_form("you & me")).await;
    let order = checkout(&harness, &mut cart);

    assert!(gift_cell(&harness, &order).contains("you &amp; me"));
}

#[tokio::test]
async fn unknown_column_ids_render_nothing() {
    setup_tracing();
    let harness = harness();
    let mut cart = Cart::new();

    add_to_cart(&harness, &mut cart, Uuid::new_v4(), 1, &gift_form("Hi")).await;
    let order = checkout(&harness, &mut cart);

    assert_eq!(harness.dispatch.render_admin_column("total", &order), "");
}
