use serde::{Deserialize, Serialize};

/// Row 1 of every batch worksheet. The first six columns match what the
/// original sheets were created with; the trailing three are optional.
pub const HEADER: [&str; 9] = [
    "Student Name",
    "Student ID",
    "Contact",
    "Email",
    "Batch",
    "Time",
    "Year",
    "Status",
    "Notes",
];

/// One student enrollment, in fixed column order. Immutable once written:
/// there is no update or delete path in this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub student_id: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    pub batch: String,
    #[serde(default, rename = "time")]
    pub time_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StudentRecord {
    /// Boundary validation before anything is sent to the remote store.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("student name must not be empty".into());
        }
        if self.student_id.trim().is_empty() {
            return Err("student id must not be empty".into());
        }
        if self.batch.trim().is_empty() {
            return Err("batch must not be empty".into());
        }
        Ok(())
    }

    /// Serialize to a worksheet row. Trailing empty cells are dropped so a
    /// record without the optional columns writes the same six-cell row the
    /// original sheets hold.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.name.clone(),
            self.student_id.clone(),
            self.contact.clone(),
            self.email.clone(),
            self.batch.clone(),
            self.time_slot.clone(),
            self.year.clone().unwrap_or_default(),
            self.status.clone().unwrap_or_default(),
            self.notes.clone().unwrap_or_default(),
        ];
        while row.last().is_some_and(|c| c.is_empty()) {
            row.pop();
        }
        row
    }

    /// Parse a worksheet row. Short rows are padded with empty cells;
    /// rows with no identifying content (blank padding the service returns
    /// for pre-sized grids) yield `None`.
    pub fn from_row(row: &[String]) -> Option<StudentRecord> {
        let cell = |i: usize| row.get(i).map(|s| s.as_str()).unwrap_or("").to_string();
        let opt = |i: usize| {
            let v = cell(i);
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        };

        if row.iter().all(|c| c.trim().is_empty()) {
            return None;
        }

        Some(StudentRecord {
            name: cell(0),
            student_id: cell(1),
            contact: cell(2),
            email: cell(3),
            batch: cell(4),
            time_slot: cell(5),
            year: opt(6),
            status: opt(7),
            notes: opt(8),
        })
    }

    /// All field values in column order, with unset optionals as "".
    pub fn field_values(&self) -> [&str; 9] {
        [
            &self.name,
            &self.student_id,
            &self.contact,
            &self.email,
            &self.batch,
            &self.time_slot,
            self.year.as_deref().unwrap_or(""),
            self.status.as_deref().unwrap_or(""),
            self.notes.as_deref().unwrap_or(""),
        ]
    }

    pub fn field(&self, field: Field) -> &str {
        self.field_values()[field as usize]
    }
}

/// Named field for field-scoped search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name = 0,
    StudentId = 1,
    Contact = 2,
    Email = 3,
    Batch = 4,
    Time = 5,
    Year = 6,
    Status = 7,
    Notes = 8,
}

impl Field {
    pub fn parse(key: &str) -> Option<Field> {
        match key {
            "name" => Some(Field::Name),
            "studentId" => Some(Field::StudentId),
            "contact" => Some(Field::Contact),
            "email" => Some(Field::Email),
            "batch" => Some(Field::Batch),
            "time" => Some(Field::Time),
            "year" => Some(Field::Year),
            "status" => Some(Field::Status),
            "notes" => Some(Field::Notes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudentRecord {
        StudentRecord {
            name: "Ann".into(),
            student_id: "S1".into(),
            contact: "555-0100".into(),
            email: "ann@example.com".into(),
            batch: "G1".into(),
            time_slot: "4pm".into(),
            year: None,
            status: None,
            notes: None,
        }
    }

    #[test]
    fn row_round_trip_preserves_fields() {
        let rec = sample();
        let row = rec.to_row();
        assert_eq!(row.len(), 6);
        assert_eq!(StudentRecord::from_row(&row), Some(rec));
    }

    #[test]
    fn optional_columns_extend_the_row() {
        let mut rec = sample();
        rec.year = Some("2026".into());
        let row = rec.to_row();
        assert_eq!(row.len(), 7);
        assert_eq!(StudentRecord::from_row(&row), Some(rec));
    }

    #[test]
    fn short_rows_are_padded() {
        let row = vec!["Bo".to_string(), "S2".to_string()];
        let rec = StudentRecord::from_row(&row).expect("record");
        assert_eq!(rec.name, "Bo");
        assert_eq!(rec.email, "");
        assert_eq!(rec.year, None);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let row = vec![String::new(), "  ".to_string(), String::new()];
        assert_eq!(StudentRecord::from_row(&row), None);
    }

    #[test]
    fn validate_rejects_missing_required_fields() {
        let mut rec = sample();
        rec.batch = "  ".into();
        assert!(rec.validate().is_err());
    }
}
