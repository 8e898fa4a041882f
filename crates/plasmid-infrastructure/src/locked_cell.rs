//! Single-assignment storage with explicit reset
//!
//! A [`LockedCell`] holds zero or one value. Writing into an occupied cell
//! fails instead of overwriting, reading an empty cell fails, and only an
//! explicit [`LockedCell::reset`] empties it again.
//!
//! Storage is an [`ArcSwapOption`], so reads are lock-free snapshots and the
//! "check empty, then write" step is a single compare-and-swap.

use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`LockedCell`], carrying the caller-supplied messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LockedCellError {
    /// A value was written while the cell was occupied
    #[error("{0}")]
    AlreadySet(&'static str),

    /// The cell was read while empty
    #[error("{0}")]
    NotSet(&'static str),
}

/// Write-once, explicitly erasable container
pub struct LockedCell<T> {
    value: ArcSwapOption<T>,
    already_set: &'static str,
    not_set: &'static str,
}

impl<T> LockedCell<T> {
    /// Create an empty cell with the messages used for its two failure modes
    pub fn new(already_set: &'static str, not_set: &'static str) -> Self {
        Self {
            value: ArcSwapOption::new(None),
            already_set,
            not_set,
        }
    }

    /// Snapshot of the stored value
    pub fn read(&self) -> Result<Arc<T>, LockedCellError> {
        self.value
            .load_full()
            .ok_or(LockedCellError::NotSet(self.not_set))
    }

    /// Store `value` if the cell is empty
    ///
    /// An occupied cell keeps its current value and `value` is dropped.
    pub fn write(&self, value: T) -> Result<(), LockedCellError> {
        let empty: Option<Arc<T>> = None;
        let previous = self.value.compare_and_swap(&empty, Some(Arc::new(value)));
        if previous.is_some() {
            return Err(LockedCellError::AlreadySet(self.already_set));
        }
        Ok(())
    }

    /// Whether a value is currently stored
    pub fn is_occupied(&self) -> bool {
        self.value.load().is_some()
    }

    /// Empty the cell, returning whether it held a value
    pub fn reset(&self) -> bool {
        self.value.swap(None).is_some()
    }
}

impl<T> fmt::Debug for LockedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedCell")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}
