//! Order-management table demo.
//!
//! Renders the same table through a fetch cycle: skeleton rows while
//! loading, the populated view, header clicks cycling the amount sort, and
//! a page transition confirmed by the host.
//!
//! Run with: `cargo run --example orders`

use datagrid::column::{Align, Column};
use datagrid::paginator::Paginator;
use datagrid::row::Row;
use datagrid::table::{RowTone, Table};
use serde_json::{Value, json};

fn orders() -> Vec<Row> {
    json!([
        {"id": "ORD-1041", "vendor": "Acme Supplies", "status": "delivered", "amount": 1250.0},
        {"id": "ORD-1042", "vendor": "Globex Traders", "status": "pending", "amount": 310.5},
        {"id": "ORD-1043", "vendor": "Initech Foods", "status": "cancelled", "amount": null},
        {"id": "ORD-1044", "vendor": "Umbrella Goods", "status": "pending", "amount": 99.0},
        {"id": "ORD-1045", "vendor": "Stark Wholesale", "status": "delivered", "amount": 4800.0},
    ])
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v.as_object().cloned().unwrap())
    .collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "Order ID").width(10),
        Column::new("vendor", "Vendor").width(16).sortable(true),
        Column::new("status", "Status").width(10).align(Align::Center),
        Column::new("amount", "Amount")
            .width(10)
            .align(Align::Right)
            .sortable(true)
            .render(|row, _| match row.get("amount").and_then(Value::as_f64) {
                Some(amount) => format!("${amount:.2}"),
                None => "—".to_string(),
            }),
    ]
}

fn main() {
    let mut table = Table::new()
        .columns(columns())
        .loading(true)
        .empty_text("No orders found")
        .row_classifier(|row, index| {
            match row.get("status").and_then(Value::as_str) {
                Some("cancelled") => RowTone::Critical,
                Some("pending") => RowTone::Accent,
                _ if index % 2 == 1 => RowTone::Striped,
                _ => RowTone::Default,
            }
        })
        .paginate(
            Paginator::new()
                .limit(5)
                .total_docs(23)
                .total_pages(5)
                .page(1),
        )
        .on_page_change(|page| println!("(host asked to load page {page})\n"));

    println!("-- loading --\n{}\n", table.view());

    table.set_rows(orders());
    table.set_loading(false);
    println!("-- page 1 --\n{}\n", table.view());

    table.click_header("amount");
    println!("-- amount ascending (nulls last) --\n{}\n", table.view());

    table.click_header("amount");
    println!("-- amount descending --\n{}\n", table.view());

    table.click_header("amount");
    table.request_next_page();
    table.set_page(2);
    println!("-- page 2 confirmed --\n{}", table.view());
}
