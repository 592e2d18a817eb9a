//! An in-memory document.

use log::{debug, trace};

use stratum_core::{grid::GridLine, level::Level};

use super::{DocumentWriter, WriteError};

#[derive(Debug)]
struct Transaction {
    name: String,
    grids: Vec<GridLine>,
    levels: Vec<Level>,
}

/// A document held entirely in memory.
///
/// Grid labels and level labels must each be unique across the document,
/// counting both committed and staged elements.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    grids: Vec<GridLine>,
    levels: Vec<Level>,
    committed: Vec<String>,
    open: Option<Transaction>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy holding an existing level, such as the ground datum.
    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.push(level);
        self
    }

    /// Committed grids, in insertion order.
    pub fn grids(&self) -> &[GridLine] {
        &self.grids
    }

    /// Committed levels, in insertion order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Names of committed transactions, oldest first.
    pub fn committed_transactions(&self) -> &[String] {
        &self.committed
    }

    pub fn in_transaction(&self) -> bool {
        self.open.is_some()
    }

    fn transaction(&mut self) -> Result<&mut Transaction, WriteError> {
        self.open.as_mut().ok_or(WriteError::NoTransaction)
    }
}

impl DocumentWriter for MemoryDocument {
    fn begin(&mut self, name: &str) -> Result<(), WriteError> {
        if let Some(open) = &self.open {
            return Err(WriteError::TransactionOpen(open.name.clone()));
        }
        self.open = Some(Transaction {
            name: name.to_string(),
            grids: Vec::new(),
            levels: Vec::new(),
        });
        Ok(())
    }

    fn insert_grid(&mut self, grid: &GridLine) -> Result<(), WriteError> {
        let label = grid.label();
        let committed = self.grids.iter().any(|existing| existing.label() == label);
        let transaction = self.transaction()?;
        if committed || transaction.grids.iter().any(|staged| staged.label() == label) {
            return Err(WriteError::DuplicateLabel(label.to_string()));
        }

        trace!(grid:%; "Grid staged");
        transaction.grids.push(grid.clone());
        Ok(())
    }

    fn insert_level(&mut self, level: &Level) -> Result<(), WriteError> {
        let label = level.label();
        let committed = self.levels.iter().any(|existing| existing.label() == label);
        let transaction = self.transaction()?;
        if committed || transaction.levels.iter().any(|staged| staged.label() == label) {
            return Err(WriteError::DuplicateLabel(label.to_string()));
        }

        trace!(level:%; "Level staged");
        transaction.levels.push(level.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), WriteError> {
        let transaction = self.open.take().ok_or(WriteError::NoTransaction)?;
        debug!(
            transaction = transaction.name,
            grids = transaction.grids.len(),
            levels = transaction.levels.len();
            "Committing transaction"
        );

        self.grids.extend(transaction.grids);
        self.levels.extend(transaction.levels);
        self.committed.push(transaction.name);
        Ok(())
    }

    fn rollback(&mut self) {
        if let Some(transaction) = self.open.take() {
            debug!(transaction = transaction.name; "Transaction rolled back");
        }
    }
}
