use crate::config::Config;
use crate::directory::{self, Program};
use crate::records::{Field, StudentRecord};
use crate::sheets::SheetsBackend;
use crate::store;

/// Equality filters narrowing the candidate set before the substring
/// match. `field` switches the match from any-field to field-scoped.
#[derive(Debug, Default, Clone)]
pub struct SearchFilters {
    pub batch: Option<String>,
    pub program: Option<Program>,
    pub year: Option<String>,
    pub field: Option<Field>,
}

/// Full re-read of every matching worksheet on every call; there is no
/// index and no cache, which is fine at these data volumes. Unreachable
/// spreadsheets and unreadable worksheets are skipped, mirroring the
/// directory's fail-soft behavior. An empty query keeps everything.
pub fn search(
    backend: &dyn SheetsBackend,
    config: &Config,
    query: &str,
    filters: &SearchFilters,
) -> Vec<StudentRecord> {
    let mut records = Vec::new();
    for batch in directory::list_batches(backend, config) {
        if filters.program.is_some_and(|p| p != batch.program) {
            continue;
        }
        if filters.batch.as_deref().is_some_and(|b| b != batch.name) {
            continue;
        }
        match store::read_batch(backend, config, &batch) {
            Ok(batch_records) => records.extend(batch_records),
            Err(e) => {
                tracing::warn!(batch = %batch.name, error = %e, "skipping unreadable worksheet");
            }
        }
    }

    if let Some(year) = filters.year.as_deref() {
        records.retain(|r| r.field(Field::Year) == year);
    }

    let needle = query.trim().to_lowercase();
    if !needle.is_empty() {
        records.retain(|r| record_matches(r, &needle, filters.field));
    }
    records
}

fn record_matches(record: &StudentRecord, needle: &str, field: Option<Field>) -> bool {
    match field {
        Some(f) => record.field(f).to_lowercase().contains(needle),
        None => record
            .field_values()
            .iter()
            .any(|v| v.to_lowercase().contains(needle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str) -> StudentRecord {
        StudentRecord {
            name: name.into(),
            student_id: id.into(),
            contact: String::new(),
            email: String::new(),
            batch: "G1".into(),
            time_slot: "4pm".into(),
            year: None,
            status: None,
            notes: None,
        }
    }

    #[test]
    fn match_is_case_insensitive_across_fields() {
        let rec = record("Ann Lee", "S1");
        assert!(record_matches(&rec, "ann", None));
        assert!(record_matches(&rec, "s1", None));
        assert!(record_matches(&rec, "4pm", None));
        assert!(!record_matches(&rec, "bob", None));
    }

    #[test]
    fn field_scoped_match_ignores_other_fields() {
        let rec = record("Ann", "S1");
        assert!(record_matches(&rec, "ann", Some(Field::Name)));
        assert!(!record_matches(&rec, "ann", Some(Field::StudentId)));
    }
}
