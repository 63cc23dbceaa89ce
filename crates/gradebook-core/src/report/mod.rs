//! Ranked score report.
//!
//! Builds a read-only view of the store sorted by total descending and
//! assigns competition ranks: tied totals share a rank, and the next distinct
//! total's rank is its 1-based position in the sorted order (gaps after
//! ties), never "previous rank + 1".

mod console;
mod export;

pub use console::render_table;
pub use export::{to_json, to_tsv, write_json, write_tsv};

use std::cmp::Reverse;

use serde::Serialize;

use crate::record::Record;
use crate::store::Store;

/// One row of the report: a record plus its derived total, average, and rank.
///
/// Ranked rows exist only inside a generated report; nothing derived is ever
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    #[serde(flatten)]
    pub record: Record,
    pub total: i64,
    pub average: f64,
    pub rank: usize,
}

/// A generated report over a snapshot of the store.
#[derive(Debug, Clone)]
pub struct Report {
    rows: Vec<RankedRow>,
}

impl Report {
    /// Generate the ranked report, or `None` when there is nothing to show.
    ///
    /// The sort is stable, so records with equal totals keep their insertion
    /// order. The store is not mutated; generating twice gives the same rows.
    pub fn generate(store: &Store) -> Option<Self> {
        if store.is_empty() {
            return None;
        }

        let mut sorted: Vec<&Record> = store.records().iter().collect();
        sorted.sort_by_key(|record| Reverse(record.total()));

        let mut rows: Vec<RankedRow> = Vec::with_capacity(sorted.len());
        for (position, record) in sorted.into_iter().enumerate() {
            let total = record.total();
            let rank = match rows.last() {
                Some(prev) if prev.total == total => prev.rank,
                _ => position + 1,
            };
            rows.push(RankedRow {
                record: record.clone(),
                total,
                average: total as f64 / 3.0,
                rank,
            });
        }

        Some(Self { rows })
    }

    /// Rows in sorted order (total descending).
    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
