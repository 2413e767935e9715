//! Column descriptors for the table.
//!
//! A column names a row field (or a logical id), carries display metadata,
//! and may supply a custom render function for its cells.
//!
//! # Example
//!
//! ```rust
//! use datagrid::column::{Align, Column};
//!
//! let columns = vec![
//!     Column::new("id", "Order ID").width(10),
//!     Column::new("amount", "Amount")
//!         .align(Align::Right)
//!         .sortable(true)
//!         .render(|row, _index| {
//!             format!("${}", row.get("amount").and_then(|v| v.as_f64()).unwrap_or(0.0))
//!         }),
//! ];
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::row::{self, Row};

/// Minimum resolved width for columns that specify none.
const DEFAULT_WIDTH: usize = 12;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A caller-supplied cell formatter.
///
/// Receives the row and its display index and returns the cell text.
/// Contract: must not panic for any value in the declared row shape; the
/// table does not catch panics from render functions.
pub type CellRenderer = Arc<dyn Fn(&Row, usize) -> String + Send + Sync>;

/// A single column definition for the table.
///
/// Keys must be unique within one column list; columns are immutable during
/// a render pass.
#[derive(Clone)]
pub struct Column {
    /// Field key looked up in each row (or a logical id for rendered columns).
    pub key: String,
    /// Header label.
    pub label: String,
    /// Display width in characters; resolved from the label when absent.
    pub width: Option<usize>,
    /// Cell alignment.
    pub align: Align,
    /// Whether header clicks cycle sort state on this column.
    pub sortable: bool,
    render: Option<CellRenderer>,
}

impl Column {
    /// Creates a new column with the given key and header label.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            align: Align::Left,
            sortable: false,
            render: None,
        }
    }

    /// Sets the display width (builder pattern).
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// Sets the alignment (builder pattern).
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets whether the column is sortable (builder pattern).
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets a custom render function for this column's cells (builder
    /// pattern).
    #[must_use]
    pub fn render(mut self, f: impl Fn(&Row, usize) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    /// Returns whether a custom render function is set.
    #[must_use]
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Produces the cell text for one row at the given display index.
    ///
    /// Dispatches to the render function if present, otherwise performs a
    /// direct field lookup by the column key.
    #[must_use]
    pub fn cell(&self, row: &Row, index: usize) -> String {
        match &self.render {
            Some(f) => f(row, index),
            None => row::cell_text(row.get(&self.key)),
        }
    }

    /// The width this column occupies on screen.
    #[must_use]
    pub fn resolved_width(&self) -> usize {
        self.width
            .unwrap_or_else(|| UnicodeWidthStr::width(self.label.as_str()).max(DEFAULT_WIDTH))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
