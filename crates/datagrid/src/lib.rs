#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Datagrid
//!
//! A reusable data table component: column descriptors, client-side
//! type-aware sorting, windowed pagination, skeleton loading rows, and
//! empty-state rendering, composed into a single string-rendered surface.
//!
//! Modules:
//! - **column** - Column descriptors with alignment, sortability, and
//!   optional cell render functions
//! - **row** - Opaque JSON-map rows and default cell formatting
//! - **sort** - Sort state cycle, null-last stable comparison, and
//!   controlled/uncontrolled ownership modes
//! - **paginator** - 1-based page state, sliding page window, and range
//!   summary
//! - **style** - Per-region styles and width-aware padding
//! - **table** - The table model tying it all together
//!
//! ## Example
//!
//! ```rust
//! use datagrid::prelude::*;
//! use serde_json::json;
//!
//! let rows: Vec<Row> = [json!({"id": 1, "status": "pending"})]
//!     .iter()
//!     .map(|v| v.as_object().cloned().unwrap())
//!     .collect();
//!
//! let table = Table::new()
//!     .columns(vec![
//!         Column::new("id", "ID"),
//!         Column::new("status", "Status").sortable(true),
//!     ])
//!     .rows(rows);
//!
//! println!("{}", table.view());
//! ```
//!
//! The component performs no I/O, spawns nothing, and has no fallible
//! operations: all transitions happen inside discrete caller-triggered
//! calls, and every view is a pure function of the current model.

pub mod column;
pub mod paginator;
pub mod row;
pub mod sort;
pub mod style;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::{Align, CellRenderer, Column};
    pub use crate::paginator::{PAGE_WINDOW, Paginator, RangeSummary};
    pub use crate::row::{Row, display_id};
    pub use crate::sort::{SortDirection, SortMode, SortState, compare_values, sort_permutation};
    pub use crate::style::{CellStyle, Styles};
    pub use crate::table::{BodyState, RowTone, SKELETON_ROW_COUNT, Table};
}
