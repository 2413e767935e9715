//! Sort engine for the table.
//!
//! Maintains the active sort key and direction, advances it through the
//! header-click cycle (ascending → descending → inactive), and orders rows
//! with a type-aware, null-last, stable comparison.
//!
//! Sorting runs in one of two modes. In [`SortMode::Uncontrolled`] the table
//! owns the state and reorders rows locally. In [`SortMode::Controlled`] the
//! caller owns ordering: the engine still advances the state so header
//! indicators stay correct, but rows are never reordered locally — the
//! caller re-supplies rows already sorted. This keeps a single ordering
//! authority and avoids double-sorting.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::Row;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// The active sort key and direction.
///
/// `Inactive` preserves the original row order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortState {
    /// No active sort; rows keep their supplied order.
    #[default]
    Inactive,
    /// Sorting by `key` in `direction`.
    Active {
        /// Column key the sort applies to.
        key: String,
        /// Current direction.
        direction: SortDirection,
    },
}

impl SortState {
    /// Returns the state a header click on `key` advances to.
    ///
    /// A click on an inactive or different column starts ascending; a second
    /// click on the same column flips to descending; a third clears the
    /// sort.
    #[must_use]
    pub fn next_for(&self, key: &str) -> Self {
        match self {
            Self::Active { key: active, direction } if active == key => match direction {
                SortDirection::Ascending => Self::Active {
                    key: key.to_string(),
                    direction: SortDirection::Descending,
                },
                SortDirection::Descending => Self::Inactive,
            },
            _ => Self::Active {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }

    /// Returns the direction if this state is active on `key`.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match self {
            Self::Active { key: active, direction } if active == key => Some(*direction),
            _ => None,
        }
    }

    /// Returns whether any sort is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::Active { key, direction } => write!(f, "{key} {direction}"),
        }
    }
}

/// Callback invoked when a header click advances the sort state.
///
/// Receives the clicked column key and the next direction (`None` when the
/// cycle cleared the sort).
pub type SortHandler = Arc<dyn Fn(&str, Option<SortDirection>) + Send + Sync>;

/// Who owns row ordering.
#[derive(Clone)]
pub enum SortMode {
    /// The table owns sort state and reorders rows locally.
    Uncontrolled(SortState),
    /// The caller owns ordering; the table tracks indicator state and
    /// notifies `on_change`, but never reorders rows itself.
    Controlled {
        /// Indicator state mirroring the caller's ordering.
        state: SortState,
        /// Notified with `(key, next_direction)` on each state change.
        on_change: SortHandler,
    },
}

impl SortMode {
    /// Returns the current sort state.
    #[must_use]
    pub fn state(&self) -> &SortState {
        match self {
            Self::Uncontrolled(state) | Self::Controlled { state, .. } => state,
        }
    }

    /// Returns whether ordering is delegated to the caller.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }
}

impl Default for SortMode {
    fn default() -> Self {
        Self::Uncontrolled(SortState::Inactive)
    }
}

impl fmt::Debug for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncontrolled(state) => f.debug_tuple("Uncontrolled").field(state).finish(),
            Self::Controlled { state, .. } => f
                .debug_struct("Controlled")
                .field("state", state)
                .field("on_change", &"<fn>")
                .finish(),
        }
    }
}

/// Compares two cell values under the given direction.
///
/// Null and missing values sort last regardless of direction. Two numeric
/// values compare numerically; anything else compares as case-insensitive
/// text.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => text_key(a).cmp(&text_key(b)),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

fn text_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}

/// Computes the display permutation of `rows` sorted by `key`.
///
/// Returns row indices in display order. The sort is stable: rows with
/// equal keys keep their relative input order.
#[must_use]
pub fn sort_permutation(rows: &[Row], key: &str, direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&i, &j| compare_values(rows[i].get(key), rows[j].get(key), direction));
    order
}
