//! Shared result store written by the benchmark workers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Serialize, Serializer};

use super::types::{BenchmarkCell, CellKey};
use crate::error::{BenchError, Result};
use crate::search::AlgorithmVariant;

/// Write-once store for cells. Every `set` goes through one lock, so workers
/// may share it while each writes its own key. Once sealed, the store takes
/// no more writes and only then hands out snapshots.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    cells: Mutex<HashMap<CellKey, BenchmarkCell>>,
    sealed: AtomicBool,
}

fn poisoned() -> BenchError {
    BenchError::InvariantViolation("result aggregator lock poisoned".to_string())
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cell for `key`. A second write to the same key means the
    /// size/variant partition was wrong and is reported, never overwritten.
    pub fn set(&self, key: CellKey, cell: BenchmarkCell) -> Result<()> {
        let mut cells = self.cells.lock().map_err(|_| poisoned())?;

        // Checked under the lock so no write slips past `seal`.
        if self.sealed.load(Ordering::Acquire) {
            return Err(BenchError::InvariantViolation(format!(
                "cell (size={}, variant={}) written after the store was sealed",
                key.size,
                key.variant.name()
            )));
        }
        if cells.contains_key(&key) {
            return Err(BenchError::InvariantViolation(format!(
                "cell (size={}, variant={}) written twice",
                key.size,
                key.variant.name()
            )));
        }
        cells.insert(key, cell);
        Ok(())
    }

    /// Mark every producer as finished. Later writes are rejected.
    pub fn seal(&self) -> Result<()> {
        let _cells = self.cells.lock().map_err(|_| poisoned())?;
        self.sealed.store(true, Ordering::Release);
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Copy out the contents as an ordered, immutable table. Only valid
    /// after [`seal`](Self::seal); a partial table is never exposed.
    pub fn snapshot(&self) -> Result<ResultTable> {
        let cells = self.cells.lock().map_err(|_| poisoned())?;
        if !self.sealed.load(Ordering::Acquire) {
            return Err(BenchError::InvariantViolation(
                "snapshot requested while producers may still write".to_string(),
            ));
        }
        Ok(ResultTable {
            cells: cells.iter().map(|(k, v)| (*k, v.clone())).collect(),
        })
    }

    /// Consume the store. Owning it proves no producer is left.
    pub fn into_table(self) -> Result<ResultTable> {
        let cells = self.cells.into_inner().map_err(|_| poisoned())?;
        Ok(ResultTable {
            cells: cells.into_iter().collect(),
        })
    }
}

/// Finished measurements ordered by size, then variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    cells: BTreeMap<CellKey, BenchmarkCell>,
}

impl ResultTable {
    pub fn get(&self, size: usize, variant: AlgorithmVariant) -> Option<&BenchmarkCell> {
        self.cells.get(&CellKey::new(size, variant))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &BenchmarkCell)> {
        self.cells.iter()
    }

    /// Cells for one dataset size, in variant order.
    pub fn row(&self, size: usize) -> impl Iterator<Item = (&CellKey, &BenchmarkCell)> {
        self.cells
            .range(CellKey::new(size, AlgorithmVariant::ALL[0])..)
            .take_while(move |(k, _)| k.size == size)
    }

    /// Keys of the declared matrix that have no cell.
    pub fn missing(&self, sizes: &[usize], variants: &[AlgorithmVariant]) -> Vec<CellKey> {
        sizes
            .iter()
            .flat_map(|&size| variants.iter().map(move |&v| CellKey::new(size, v)))
            .filter(|key| !self.cells.contains_key(key))
            .collect()
    }
}

#[derive(Serialize)]
struct CellRecord {
    size: usize,
    variant: AlgorithmVariant,
    iterations: usize,
    avg_duration_nanos: f64,
    avg_tick_count: u64,
    found_index: Option<usize>,
}

// Struct keys are not valid JSON object keys, so the table goes out as a list.
impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|(key, cell)| CellRecord {
            size: key.size,
            variant: key.variant,
            iterations: cell.iterations,
            avg_duration_nanos: cell.avg_duration_nanos,
            avg_tick_count: cell.avg_tick_count,
            found_index: cell.found_index,
        }))
    }
}
