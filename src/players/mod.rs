pub mod normalize;
pub mod types;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use types::RawRecord;

/// In-memory copy of the player dataset, in file order.
pub struct RecordStore {
    records: Vec<RawRecord>,
}

impl RecordStore {
    /// Read every line of a comma-delimited file. No header skip, no width check.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let store = Self::from_reader(file)?;
        debug!(path = %path.display(), records = store.len(), "dataset read");
        Ok(store)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(RawRecord::new(row.iter().map(str::to_string).collect()));
        }
        Ok(Self { records })
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Uniform pick. Borrowed from the store, never copied.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&RawRecord> {
        if self.records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let idx = rng.gen_range(0..self.records.len());
        debug!(idx, "record index drawn");
        Ok(&self.records[idx])
    }
}
