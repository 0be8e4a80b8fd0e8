mod memory;
mod rest;

pub use memory::MemoryBackend;
pub use rest::{RestBackend, ServiceAccountKey};

use crate::error::StoreError;

/// The spreadsheet service seam. One implementation talks to the real
/// remote API; the in-memory one backs the integration tests. All calls
/// are synchronous single shots: no retries, no batching, no caching of
/// sheet contents.
pub trait SheetsBackend {
    /// Worksheet titles in the sheet's native tab order.
    fn worksheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, StoreError>;

    /// Add an empty worksheet with the given grid size.
    fn add_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
        rows: u32,
        cols: u32,
    ) -> Result<(), StoreError>;

    /// Append one row after the last non-empty row of a worksheet.
    fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<(), StoreError>;

    /// Every populated row of a worksheet, header included, cells as text.
    fn read_rows(&self, spreadsheet_id: &str, worksheet: &str)
        -> Result<Vec<Vec<String>>, StoreError>;
}
