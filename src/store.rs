use crate::config::Config;
use crate::directory::{self, Batch, Program};
use crate::error::StoreError;
use crate::records::{StudentRecord, HEADER};
use crate::sheets::SheetsBackend;

// Grid size the original sheets were provisioned with.
pub const WORKSHEET_ROWS: u32 = 100;
pub const WORKSHEET_COLS: u32 = 10;

/// Add a worksheet for a new batch and write its header row. The
/// duplicate check is a linear scan over the directory and is not atomic:
/// two concurrent creators can still race, exactly as the backing service
/// allows.
pub fn create_batch(
    backend: &dyn SheetsBackend,
    config: &Config,
    name: &str,
    program: Program,
) -> Result<Batch, StoreError> {
    if directory::list_batches(backend, config)
        .iter()
        .any(|b| b.name == name)
    {
        return Err(StoreError::DuplicateName {
            name: name.to_string(),
        });
    }

    let spreadsheet_id = config.spreadsheet_id(program);
    backend.add_worksheet(spreadsheet_id, name, WORKSHEET_ROWS, WORKSHEET_COLS)?;
    let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    backend.append_row(spreadsheet_id, name, &header)?;
    tracing::info!(batch = name, program = %program, "created batch");

    Ok(Batch {
        name: name.to_string(),
        program,
    })
}

/// Append one student row to the worksheet named by the record's batch.
/// Routing tries the declared program's spreadsheet first and falls back
/// to the other one, so a batch filed under the wrong program still
/// accepts the row. Returns the program that actually holds the batch;
/// nothing is written when the batch exists nowhere. BatchNotFound is
/// only reported when both lookups succeeded: an unreachable spreadsheet
/// means the batch may well exist, so that failure surfaces as-is.
pub fn append_student(
    backend: &dyn SheetsBackend,
    config: &Config,
    record: &StudentRecord,
    program: Program,
) -> Result<Program, StoreError> {
    let mut lookup_failure: Option<StoreError> = None;
    for candidate in [program, program.other()] {
        let spreadsheet_id = config.spreadsheet_id(candidate);
        match backend.worksheet_titles(spreadsheet_id) {
            Ok(titles) if titles.iter().any(|t| *t == record.batch) => {
                backend.append_row(spreadsheet_id, &record.batch, &record.to_row())?;
                if candidate != program {
                    tracing::warn!(
                        batch = %record.batch,
                        declared = %program,
                        actual = %candidate,
                        "batch found under a different program than declared"
                    );
                }
                return Ok(candidate);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(program = %candidate, error = %e, "spreadsheet lookup failed");
                if lookup_failure.is_none() {
                    lookup_failure = Some(e);
                }
            }
        }
    }

    match lookup_failure {
        Some(e) => Err(e),
        None => Err(StoreError::BatchNotFound {
            name: record.batch.clone(),
        }),
    }
}

/// Bulk-read one batch's records: the header row is skipped and blank
/// padding rows are dropped.
pub fn read_batch(
    backend: &dyn SheetsBackend,
    config: &Config,
    batch: &Batch,
) -> Result<Vec<StudentRecord>, StoreError> {
    let rows = backend.read_rows(config.spreadsheet_id(batch.program), &batch.name)?;
    Ok(rows
        .iter()
        .skip(1)
        .filter_map(|row| StudentRecord::from_row(row))
        .collect())
}
