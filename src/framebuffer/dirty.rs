//! Per-page tracking of buffer bytes changed since the last sync.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

/// Maps `page -> (column -> updated byte)` for every buffer byte whose
/// stored value changed since it was last transmitted.
///
/// Pages are indexed numerically and columns are held in a `BTreeMap`,
/// so iteration is always ascending in both dimensions. The sync
/// protocol relies on that ordering to compute contiguous column
/// spans.
#[derive(Debug, Clone)]
pub struct DirtyRegions {
    pages: Vec<BTreeMap<u16, u8>>,
}

impl DirtyRegions {
    pub fn new(total_pages: usize) -> Self {
        Self {
            pages: vec![BTreeMap::new(); total_pages],
        }
    }

    /// Record that the byte at `(page, column)` now holds `value`.
    pub fn record(&mut self, page: usize, column: u16, value: u8) {
        if let Some(entries) = self.pages.get_mut(page) {
            entries.insert(column, value);
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// True when no byte has changed since the last sync.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(BTreeMap::is_empty)
    }

    /// Touched columns of `page`, ascending.
    pub fn columns(&self, page: usize) -> impl Iterator<Item = u16> + '_ {
        self.pages
            .get(page)
            .into_iter()
            .flat_map(|entries| entries.keys().copied())
    }

    /// Smallest and largest touched column of `page`, if any.
    pub fn span(&self, page: usize) -> Option<(u16, u16)> {
        let entries = self.pages.get(page)?;
        let (&min, _) = entries.first_key_value()?;
        let (&max, _) = entries.last_key_value()?;
        Some((min, max))
    }

    /// Drop the records for `page` after it has been transmitted.
    pub fn clear_page(&mut self, page: usize) {
        if let Some(entries) = self.pages.get_mut(page) {
            entries.clear();
        }
    }
}
