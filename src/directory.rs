use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sheets::SheetsBackend;

/// Which of the two backing spreadsheets a batch lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "IELTS")]
    Ielts,
    #[serde(rename = "Aptis")]
    Aptis,
}

impl Program {
    /// Directory traversal order is fixed: IELTS first, then Aptis.
    pub const ALL: [Program; 2] = [Program::Ielts, Program::Aptis];

    pub fn label(&self) -> &'static str {
        match self {
            Program::Ielts => "IELTS",
            Program::Aptis => "Aptis",
        }
    }

    pub fn parse(s: &str) -> Option<Program> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ielts" => Some(Program::Ielts),
            "aptis" => Some(Program::Aptis),
            _ => None,
        }
    }

    pub fn other(&self) -> Program {
        match self {
            Program::Ielts => Program::Aptis,
            Program::Aptis => Program::Ielts,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One worksheet in one backing spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub name: String,
    pub program: Program,
}

/// Enumerate every batch across both spreadsheets, in each sheet's native
/// worksheet order. Fails soft: an unreachable spreadsheet is skipped so
/// the other program's batches still come back.
pub fn list_batches(backend: &dyn SheetsBackend, config: &Config) -> Vec<Batch> {
    let mut batches = Vec::new();
    for program in Program::ALL {
        match backend.worksheet_titles(config.spreadsheet_id(program)) {
            Ok(titles) => {
                batches.extend(titles.into_iter().map(|name| Batch { name, program }));
            }
            Err(e) => {
                tracing::warn!(program = %program, error = %e, "skipping unreachable spreadsheet");
            }
        }
    }
    batches
}
