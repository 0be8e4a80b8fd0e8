use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::sheets::SheetsBackend;

/// In-memory stand-in for the spreadsheet service. Clones share state so a
/// test can keep a handle for inspection while the daemon state owns the
/// boxed trait object. Worksheets keep insertion order, matching the
/// native tab order of a real spreadsheet.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    spreadsheets: HashMap<String, Vec<Worksheet>>,
    unreachable: HashSet<String>,
}

struct Worksheet {
    title: String,
    rows: Vec<Vec<String>>,
}

impl MemoryBackend {
    pub fn with_spreadsheets<I, S>(ids: I) -> MemoryBackend
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = MemoryBackend::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            for id in ids {
                inner.spreadsheets.insert(id.into(), Vec::new());
            }
        }
        backend
    }

    /// Make a spreadsheet answer every call with a remote error, for
    /// exercising fail-soft paths.
    pub fn set_unreachable(&self, spreadsheet_id: &str, unreachable: bool) {
        let mut inner = self.inner.lock().unwrap();
        if unreachable {
            inner.unreachable.insert(spreadsheet_id.to_string());
        } else {
            inner.unreachable.remove(spreadsheet_id);
        }
    }

    fn check_reachable(inner: &Inner, spreadsheet_id: &str) -> Result<(), StoreError> {
        if inner.unreachable.contains(spreadsheet_id) {
            return Err(StoreError::Remote(format!(
                "spreadsheet {spreadsheet_id} is unreachable"
            )));
        }
        if !inner.spreadsheets.contains_key(spreadsheet_id) {
            return Err(StoreError::NotFound {
                resource: format!("spreadsheet {spreadsheet_id}"),
            });
        }
        Ok(())
    }
}

impl SheetsBackend for MemoryBackend {
    fn worksheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_reachable(&inner, spreadsheet_id)?;
        Ok(inner.spreadsheets[spreadsheet_id]
            .iter()
            .map(|ws| ws.title.clone())
            .collect())
    }

    fn add_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
        _rows: u32,
        _cols: u32,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_reachable(&inner, spreadsheet_id)?;
        let sheets = inner.spreadsheets.get_mut(spreadsheet_id).unwrap();
        if sheets.iter().any(|ws| ws.title == title) {
            return Err(StoreError::Remote(format!(
                "a sheet named '{title}' already exists"
            )));
        }
        sheets.push(Worksheet {
            title: title.to_string(),
            rows: Vec::new(),
        });
        Ok(())
    }

    fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_reachable(&inner, spreadsheet_id)?;
        let sheets = inner.spreadsheets.get_mut(spreadsheet_id).unwrap();
        let Some(ws) = sheets.iter_mut().find(|ws| ws.title == worksheet) else {
            return Err(StoreError::NotFound {
                resource: format!("worksheet {worksheet}"),
            });
        };
        ws.rows.push(row.to_vec());
        Ok(())
    }

    fn read_rows(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_reachable(&inner, spreadsheet_id)?;
        let Some(ws) = inner.spreadsheets[spreadsheet_id]
            .iter()
            .find(|ws| ws.title == worksheet)
        else {
            return Err(StoreError::NotFound {
                resource: format!("worksheet {worksheet}"),
            });
        };
        Ok(ws.rows.clone())
    }
}
