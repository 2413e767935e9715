//! Data table component.
//!
//! Composes column descriptors, opaque rows, the sort engine, the
//! pagination control, and loading/empty placeholder states into one
//! string-rendered display surface.
//!
//! The body is always in exactly one of three states, decided per render
//! pass: loading (a fixed number of skeleton rows), empty (one full-width
//! message row), or populated. Re-entering loading suppresses rows until it
//! clears.
//!
//! # Example
//!
//! ```rust
//! use datagrid::column::Column;
//! use datagrid::table::Table;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"id": 1, "vendor": "Acme"}).as_object().cloned().unwrap(),
//!     json!({"id": 2, "vendor": "Globex"}).as_object().cloned().unwrap(),
//! ];
//!
//! let mut table = Table::new()
//!     .columns(vec![
//!         Column::new("id", "ID"),
//!         Column::new("vendor", "Vendor").sortable(true),
//!     ])
//!     .rows(rows);
//!
//! table.click_header("vendor");
//! println!("{}", table.view());
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::column::{Align, Column};
use crate::paginator::Paginator;
use crate::row::Row;
use crate::sort::{self, SortMode, SortState};
use crate::style::{self, CellStyle, Styles};

/// Number of placeholder rows rendered while loading.
pub const SKELETON_ROW_COUNT: usize = 8;

/// Gap between adjacent columns, in spaces.
const COLUMN_GAP: &str = "  ";

/// Visual treatment of one data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    /// Plain row.
    Default,
    /// Alternate-row treatment.
    Striped,
    /// Caller-flagged row of interest.
    Accent,
    /// Caller-flagged problem row.
    Critical,
}

/// Callback classifying one row's visual treatment.
///
/// Receives the row and its display index. When absent, rows alternate
/// [`RowTone::Default`] and [`RowTone::Striped`] by even/odd index.
pub type RowClassifier = Arc<dyn Fn(&Row, usize) -> RowTone + Send + Sync>;

/// Callback invoked with a validated page number when a page transition is
/// requested.
pub type PageHandler = Arc<dyn Fn(usize) + Send + Sync>;

/// Which of the three mutually exclusive body states the table is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// A fetch is in flight; skeleton rows are shown.
    Loading,
    /// Not loading and no rows; the empty-state message is shown.
    Empty,
    /// One rendered row per data entry.
    Populated,
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Empty => write!(f, "empty"),
            Self::Populated => write!(f, "populated"),
        }
    }
}

/// Data table model.
///
/// The table performs no I/O and has no fallible operations of its own:
/// missing optional configuration resolves to defaults, out-of-range page
/// requests are ignored, and panics from caller-supplied render functions
/// propagate (render functions must not panic for any value in the declared
/// row shape).
#[derive(Clone)]
pub struct Table {
    /// Styles for rendering.
    pub styles: Styles,
    columns: Vec<Column>,
    rows: Vec<Row>,
    loading: bool,
    empty_text: String,
    sort: SortMode,
    classifier: Option<RowClassifier>,
    paginator: Option<Paginator>,
    on_page_change: Option<PageHandler>,
    /// Cached display permutation; rebuilt only when rows or sort change.
    order: Vec<usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            columns: Vec::new(),
            rows: Vec::new(),
            loading: false,
            empty_text: "No records found".to_string(),
            sort: SortMode::default(),
            classifier: None,
            paginator: None,
            on_page_change: None,
            order: Vec::new(),
        }
    }

    /// Sets the columns (builder pattern).
    #[must_use]
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the rows (builder pattern).
    #[must_use]
    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the loading flag (builder pattern).
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the empty-state message (builder pattern).
    #[must_use]
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Sets an initial internally-owned sort state (builder pattern).
    #[must_use]
    pub fn sort_state(mut self, state: SortState) -> Self {
        self.sort = SortMode::Uncontrolled(state);
        self.refresh_order();
        self
    }

    /// Delegates ordering to the caller (builder pattern).
    ///
    /// The table keeps indicator state and notifies `on_change` with
    /// `(key, next_direction)` on header clicks, but never reorders rows
    /// locally; the caller re-supplies rows already sorted.
    #[must_use]
    pub fn controlled_sort(
        mut self,
        state: SortState,
        on_change: impl Fn(&str, Option<sort::SortDirection>) + Send + Sync + 'static,
    ) -> Self {
        self.sort = SortMode::Controlled {
            state,
            on_change: Arc::new(on_change),
        };
        self.refresh_order();
        self
    }

    /// Sets a row classifier (builder pattern).
    #[must_use]
    pub fn row_classifier(mut self, f: impl Fn(&Row, usize) -> RowTone + Send + Sync + 'static) -> Self {
        self.classifier = Some(Arc::new(f));
        self
    }

    /// Enables pagination with the given caller-owned metadata (builder
    /// pattern).
    #[must_use]
    pub fn paginate(mut self, paginator: Paginator) -> Self {
        self.paginator = Some(paginator);
        self
    }

    /// Sets the page-change callback (builder pattern).
    #[must_use]
    pub fn on_page_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Arc::new(f));
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the columns.
    #[must_use]
    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the rows in supplied order.
    #[must_use]
    pub fn get_rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns whether the loading flag is set.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current sort state.
    #[must_use]
    pub fn get_sort_state(&self) -> &SortState {
        self.sort.state()
    }

    /// Returns the pagination control, if enabled.
    #[must_use]
    pub fn get_paginator(&self) -> Option<&Paginator> {
        self.paginator.as_ref()
    }

    /// Replaces the rows and recomputes the display order.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.refresh_order();
    }

    /// Replaces the columns.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Sets the loading flag. While set, prior rows are suppressed in favor
    /// of skeleton placeholders.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the sort state from outside, preserving the control mode.
    pub fn set_sort_state(&mut self, state: SortState) {
        match &mut self.sort {
            SortMode::Uncontrolled(s) | SortMode::Controlled { state: s, .. } => *s = state,
        }
        self.refresh_order();
    }

    /// Applies a caller-confirmed page number, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        if let Some(p) = &mut self.paginator {
            p.set_page(page);
        }
    }

    /// Replaces the caller-owned pagination metadata.
    pub fn set_pagination(&mut self, total_pages: usize, total_docs: usize, limit: usize) {
        if let Some(p) = &mut self.paginator {
            p.set_metadata(total_pages, total_docs, limit);
        }
    }

    /// Returns the body state for the current render pass.
    ///
    /// Loading wins over everything; otherwise an empty row collection
    /// yields the empty state.
    #[must_use]
    pub fn body_state(&self) -> BodyState {
        if self.loading {
            BodyState::Loading
        } else if self.rows.is_empty() {
            BodyState::Empty
        } else {
            BodyState::Populated
        }
    }

    /// Returns the rows in display order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.order.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Returns the cached display permutation over the supplied rows.
    #[must_use]
    pub fn display_order(&self) -> &[usize] {
        &self.order
    }

    /// Handles a click on the header of the column with the given key.
    ///
    /// Advances the sort cycle for sortable columns; clicks on non-sortable
    /// or unknown columns are no-ops. In controlled mode the change handler
    /// is notified and rows are left in supplied order.
    pub fn click_header(&mut self, key: &str) {
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            trace!(key, "header click on unknown column ignored");
            return;
        };
        if !column.sortable {
            trace!(key, "header click on non-sortable column ignored");
            return;
        }

        let next = self.sort.state().next_for(key);
        debug!(key, next = %next, "sort state advanced");

        match &mut self.sort {
            SortMode::Uncontrolled(state) => {
                *state = next;
                self.refresh_order();
            }
            SortMode::Controlled { state, on_change } => {
                let direction = match &next {
                    SortState::Active { direction, .. } => Some(*direction),
                    SortState::Inactive => None,
                };
                *state = next;
                (on_change)(key, direction);
            }
        }
    }

    /// Requests a page transition.
    ///
    /// Out-of-range pages (below 1 or above the page count) are silently
    /// ignored; the callback is only ever invoked with a valid page number.
    pub fn request_page(&self, page: usize) {
        let Some(paginator) = &self.paginator else {
            return;
        };
        if !paginator.is_valid_page(page) {
            trace!(page, "out-of-range page request ignored");
            return;
        }
        if let Some(handler) = &self.on_page_change {
            handler(page);
        }
    }

    /// Requests the page before the current one; a no-op on page 1.
    pub fn request_prev_page(&self) {
        if let Some(p) = &self.paginator {
            if !p.on_first_page() {
                self.request_page(p.current_page() - 1);
            }
        }
    }

    /// Requests the page after the current one; a no-op on the last page.
    pub fn request_next_page(&self) {
        if let Some(p) = &self.paginator {
            if !p.on_last_page() {
                self.request_page(p.current_page() + 1);
            }
        }
    }

    /// Renders the table: header, body, and pager line when enabled.
    #[must_use]
    pub fn view(&self) -> String {
        let mut sections = vec![self.headers_view()];
        sections.push(self.body_view());
        if let Some(paginator) = &self.paginator {
            sections.push(paginator.view());
        }
        sections.join("\n")
    }

    /// Total display width of the table.
    fn total_width(&self) -> usize {
        let widths: usize = self.columns.iter().map(Column::resolved_width).sum();
        widths + COLUMN_GAP.len() * self.columns.len().saturating_sub(1)
    }

    /// Renders the header row with sort indicators.
    fn headers_view(&self) -> String {
        let state = self.sort.state();
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|col| {
                let text = match state.direction_for(&col.key) {
                    Some(direction) => format!(
                        "{} {}",
                        col.label,
                        match direction {
                            sort::SortDirection::Ascending => "↑",
                            sort::SortDirection::Descending => "↓",
                        }
                    ),
                    None => col.label.clone(),
                };
                style::pad(&text, col.resolved_width(), col.align)
            })
            .collect();
        self.styles.header.render(&cells.join(COLUMN_GAP))
    }

    fn body_view(&self) -> String {
        match self.body_state() {
            BodyState::Loading => self.skeleton_view(),
            BodyState::Empty => self.empty_view(),
            BodyState::Populated => self.rows_view(),
        }
    }

    /// Renders the fixed block of skeleton placeholder rows.
    fn skeleton_view(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|col| "░".repeat(col.resolved_width()))
            .collect();
        let line = self.styles.skeleton.render(&cells.join(COLUMN_GAP));
        vec![line; SKELETON_ROW_COUNT].join("\n")
    }

    /// Renders the single full-width empty-state row.
    fn empty_view(&self) -> String {
        let line = style::pad(&self.empty_text, self.total_width(), Align::Center);
        self.styles.empty.render(&line)
    }

    fn rows_view(&self) -> String {
        self.order
            .iter()
            .enumerate()
            .map(|(index, &row_idx)| self.render_row(&self.rows[row_idx], index))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders one data row at the given display index.
    fn render_row(&self, row: &Row, index: usize) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|col| style::pad(&col.cell(row, index), col.resolved_width(), col.align))
            .collect();
        self.tone_style(self.row_tone(row, index))
            .render(&cells.join(COLUMN_GAP))
    }

    fn row_tone(&self, row: &Row, index: usize) -> RowTone {
        match &self.classifier {
            Some(f) => f(row, index),
            None if index % 2 == 1 => RowTone::Striped,
            None => RowTone::Default,
        }
    }

    fn tone_style(&self, tone: RowTone) -> &CellStyle {
        match tone {
            RowTone::Default => &self.styles.row,
            RowTone::Striped => &self.styles.stripe,
            RowTone::Accent => &self.styles.accent,
            RowTone::Critical => &self.styles.critical,
        }
    }

    /// Rebuilds the cached display permutation.
    ///
    /// Ordering is applied locally only when the sort is internally owned;
    /// in controlled mode the supplied order is the caller's order.
    fn refresh_order(&mut self) {
        self.order = match &self.sort {
            SortMode::Uncontrolled(SortState::Active { key, direction }) => {
                sort::sort_permutation(&self.rows, key, *direction)
            }
            _ => (0..self.rows.len()).collect(),
        };
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("loading", &self.loading)
            .field("empty_text", &self.empty_text)
            .field("sort", &self.sort)
            .field("classifier", &self.classifier.as_ref().map(|_| "<fn>"))
            .field("paginator", &self.paginator)
            .field("body_state", &self.body_state())
            .finish()
    }
}
