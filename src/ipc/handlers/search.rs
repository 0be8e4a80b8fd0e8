use serde_json::json;

use crate::directory::Program;
use crate::ipc::error::{err, no_session, ok};
use crate::ipc::types::{AppState, Request};
use crate::records::Field;
use crate::search::{self, SearchFilters};

fn handle_students_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(session) = state.session.as_ref() else {
        return no_session(&req.id);
    };

    let query = match req.params.get("query") {
        None | Some(serde_json::Value::Null) => "",
        Some(serde_json::Value::String(q)) => q.as_str(),
        Some(_) => return err(&req.id, "bad_params", "query must be a string", None),
    };

    let mut filters = SearchFilters {
        batch: req
            .params
            .get("batch")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        ..SearchFilters::default()
    };
    if let Some(p) = req.params.get("program").and_then(|v| v.as_str()) {
        match Program::parse(p) {
            Some(program) => filters.program = Some(program),
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    "program must be IELTS or Aptis",
                    None,
                )
            }
        }
    }
    if let Some(y) = req.params.get("year").and_then(|v| v.as_str()) {
        filters.year = Some(y.to_string());
    }
    if let Some(f) = req.params.get("field").and_then(|v| v.as_str()) {
        match Field::parse(f) {
            Some(field) => filters.field = Some(field),
            None => return err(&req.id, "bad_params", format!("unknown field: {f}"), None),
        }
    }

    let records = search::search(session.backend.as_ref(), &session.config, query, &filters);
    ok(
        &req.id,
        json!({ "count": records.len(), "records": records }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.search" => Some(handle_students_search(state, req)),
        _ => None,
    }
}
