//! Writing layouts into a document.
//!
//! A [`DocumentWriter`] is whatever owns the persistent model: a host
//! application, an in-memory store, a file renderer. It exposes a single
//! write transaction at a time. [`apply_layout`] drives a writer through one
//! transaction so that a layout lands completely or not at all.
//!
//! # Example
//!
//! ```
//! use stratum::document::{MemoryDocument, apply_layout};
//! use stratum_core::{GridParams, LayoutGenerator, LayoutRequest, LevelParams};
//!
//! let request = LayoutRequest::new(
//!     GridParams::new(2, 6.0, 12.0),
//!     GridParams::new(2, 6.0, 12.0),
//!     LevelParams::new(2, 3.0, 1.0),
//! )
//! .unwrap();
//! let layout = LayoutGenerator::default().build_layout(&request).unwrap();
//!
//! let mut document = MemoryDocument::new();
//! apply_layout(&mut document, &layout).unwrap();
//! assert_eq!(document.grids().len(), 4);
//! assert_eq!(document.levels().len(), 2);
//! ```

mod memory;

pub use memory::MemoryDocument;

use log::{debug, info, warn};
use thiserror::Error;

use stratum_core::{LayoutResult, grid::GridLine, level::Level};

/// Name of the transaction opened by [`apply_layout`].
pub const TRANSACTION_NAME: &str = "Create grid";

/// Errors raised by a document writer.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("no transaction is open")]
    NoTransaction,

    #[error("transaction `{0}` is already open")]
    TransactionOpen(String),

    #[error("an element labeled `{0}` already exists")]
    DuplicateLabel(String),

    #[error("document rejected the element: {0}")]
    Rejected(String),
}

/// A sink that persists grids and levels inside write transactions.
///
/// Inserted elements become visible only after [`commit`](Self::commit);
/// [`rollback`](Self::rollback) discards everything since
/// [`begin`](Self::begin).
pub trait DocumentWriter {
    /// Opens a named write transaction.
    fn begin(&mut self, name: &str) -> Result<(), WriteError>;

    /// Stages a grid line in the open transaction.
    fn insert_grid(&mut self, grid: &GridLine) -> Result<(), WriteError>;

    /// Stages a level in the open transaction.
    fn insert_level(&mut self, level: &Level) -> Result<(), WriteError>;

    /// Publishes everything staged since `begin`.
    fn commit(&mut self) -> Result<(), WriteError>;

    /// Discards everything staged since `begin`. Does nothing without an
    /// open transaction.
    fn rollback(&mut self);
}

/// Writes a complete layout inside one transaction.
///
/// Vertical grids, horizontal grids and levels are inserted in that order.
/// The transaction commits only if every insertion succeeds. If an insertion
/// or the commit fails, the transaction is rolled back and the first error
/// returned.
///
/// # Errors
///
/// Returns the first [`WriteError`] raised by the writer.
pub fn apply_layout(
    writer: &mut dyn DocumentWriter,
    layout: &LayoutResult,
) -> Result<(), WriteError> {
    writer.begin(TRANSACTION_NAME)?;
    debug!(transaction = TRANSACTION_NAME; "Transaction started");

    if let Err(err) = insert_all(writer, layout).and_then(|()| writer.commit()) {
        warn!(err:%; "Rolling back layout transaction");
        writer.rollback();
        return Err(err);
    }

    info!(elements = layout.len(); "Layout written to document");
    Ok(())
}

fn insert_all(writer: &mut dyn DocumentWriter, layout: &LayoutResult) -> Result<(), WriteError> {
    for grid in layout.grids() {
        writer.insert_grid(grid)?;
    }
    for level in layout.levels() {
        writer.insert_level(level)?;
    }
    Ok(())
}
