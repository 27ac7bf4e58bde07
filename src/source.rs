use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::types::RawRecord;

/// Read every row of a scraped CSV export into memory.
///
/// The reader tolerates a UTF-8 byte-order mark and ragged rows; columns the
/// export does not carry deserialize as empty strings. Any structural CSV
/// error is fatal for the whole run.
pub fn load_rows(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawRecord = record?;
        rows.push(row);
    }
    Ok(rows)
}
