//! End-to-end scenarios driving the table the way a host application does:
//! fetch cycles toggling the loading flag, header clicks in both sort
//! modes, and page requests flowing through the caller back into the model.

use std::sync::{Arc, Mutex};

use datagrid::column::{Align, Column};
use datagrid::paginator::Paginator;
use datagrid::row::{Row, display_id};
use datagrid::sort::{SortDirection, SortState, sort_permutation};
use datagrid::table::{BodyState, SKELETON_ROW_COUNT, Table};
use serde_json::json;

fn rows(values: serde_json::Value) -> Vec<Row> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
}

fn order_rows() -> Vec<Row> {
    rows(json!([
        {"id": 1, "amount": 50},
        {"id": 2, "amount": null},
        {"id": 3, "amount": 10},
    ]))
}

fn order_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(6),
        Column::new("amount", "Amount").width(10).align(Align::Right).sortable(true),
    ]
}

fn visible_ids(table: &Table) -> Vec<i64> {
    table
        .visible_rows()
        .iter()
        .map(|r| r.get("id").and_then(serde_json::Value::as_i64).unwrap())
        .collect()
}

#[test]
fn test_amount_click_cycle_ordering() {
    let mut table = Table::new().columns(order_columns()).rows(order_rows());

    // First click: ascending, null last.
    table.click_header("amount");
    assert_eq!(visible_ids(&table), vec![3, 1, 2]);

    // Second click: descending, null still last.
    table.click_header("amount");
    assert_eq!(visible_ids(&table), vec![1, 3, 2]);

    // Third click: original order restored.
    table.click_header("amount");
    assert_eq!(visible_ids(&table), vec![1, 2, 3]);

    // Unsortable column never budges state.
    table.click_header("id");
    assert_eq!(*table.get_sort_state(), SortState::Inactive);
}

#[test]
fn test_fetch_cycle_state_machine() {
    colored::control::set_override(false);

    let mut table = Table::new()
        .columns(order_columns())
        .loading(true)
        .empty_text("No orders found");

    // Fetch in flight: skeleton rows regardless of data.
    assert_eq!(table.body_state(), BodyState::Loading);
    assert_eq!(table.view().lines().count(), 1 + SKELETON_ROW_COUNT);

    // Fetch returns nothing.
    table.set_loading(false);
    assert_eq!(table.body_state(), BodyState::Empty);
    assert!(table.view().contains("No orders found"));

    // Refetch returns data.
    table.set_loading(true);
    assert_eq!(table.body_state(), BodyState::Loading);
    table.set_rows(order_rows());
    // Loading still wins until it clears.
    assert_eq!(table.body_state(), BodyState::Loading);
    table.set_loading(false);
    assert_eq!(table.body_state(), BodyState::Populated);
    assert_eq!(table.view().lines().count(), 1 + 3);
}

#[test]
fn test_controlled_sort_round_trip() {
    // The host owns ordering: on change it re-sorts and re-supplies rows,
    // exactly once, so the table never double-sorts.
    let requested: Arc<Mutex<Option<(String, Option<SortDirection>)>>> =
        Arc::new(Mutex::new(None));
    let sink = Arc::clone(&requested);

    let mut table = Table::new()
        .columns(order_columns())
        .rows(order_rows())
        .controlled_sort(SortState::Inactive, move |key, direction| {
            *sink.lock().unwrap() = Some((key.to_string(), direction));
        });

    table.click_header("amount");
    // Rows are still in supplied order until the host answers.
    assert_eq!(visible_ids(&table), vec![1, 2, 3]);

    let (key, direction) = requested.lock().unwrap().clone().unwrap();
    assert_eq!(key, "amount");
    assert_eq!(direction, Some(SortDirection::Ascending));

    // Host sorts on its side and re-supplies.
    let data = order_rows();
    let order = sort_permutation(&data, &key, direction.unwrap());
    let sorted: Vec<Row> = order.iter().map(|&i| data[i].clone()).collect();
    table.set_rows(sorted);

    assert_eq!(visible_ids(&table), vec![3, 1, 2]);
}

#[test]
fn test_pagination_round_trip() {
    colored::control::set_override(false);

    let confirmed: Arc<Mutex<Option<usize>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&confirmed);

    let mut table = Table::new()
        .columns(order_columns())
        .rows(order_rows())
        .paginate(
            Paginator::new()
                .limit(3)
                .total_docs(25)
                .total_pages(9)
                .page(1),
        )
        .on_page_change(move |page| {
            *sink.lock().unwrap() = Some(page);
        });

    assert!(table.view().contains("[1]"));
    assert!(table.view().contains("1–3 of 25"));

    // Out-of-range requests never reach the host.
    table.request_page(0);
    table.request_page(10);
    assert_eq!(*confirmed.lock().unwrap(), None);

    // A valid request does; the host confirms it back into the model.
    table.request_next_page();
    let page = confirmed.lock().unwrap().unwrap();
    assert_eq!(page, 2);
    table.set_page(page);

    assert!(table.view().contains("[2]"));
    assert!(table.view().contains("4–6 of 25"));
}

#[test]
fn test_display_identity_in_display_order() {
    let mut table = Table::new().columns(order_columns()).rows(rows(json!([
        {"id": "a", "amount": 2},
        {"amount": 1},
    ])));

    table.click_header("amount");
    let order = table.display_order().to_vec();
    let labels: Vec<String> = order
        .iter()
        .map(|&i| display_id(&table.get_rows()[i], i))
        .collect();
    // The row with no id falls back to its positional index.
    assert_eq!(labels, vec!["1".to_string(), "a".to_string()]);
}
