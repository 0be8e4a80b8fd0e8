use serde_json::json;

use crate::directory::Program;
use crate::ipc::error::{err, no_session, ok, store_err};
use crate::ipc::types::{AppState, Request};
use crate::records::StudentRecord;
use crate::store;

fn handle_students_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(session) = state.session.as_ref() else {
        return no_session(&req.id);
    };

    let program = match req
        .params
        .get("program")
        .and_then(|v| v.as_str())
        .and_then(Program::parse)
    {
        Some(p) => p,
        None => {
            return err(
                &req.id,
                "bad_params",
                "program must be IELTS or Aptis",
                None,
            )
        }
    };

    // The record schema is the boundary: unknown params are ignored,
    // missing required fields are rejected before any remote call.
    let record: StudentRecord = match serde_json::from_value(req.params.clone()) {
        Ok(r) => r,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };
    if let Err(reason) = record.validate() {
        return err(&req.id, "bad_params", reason, None);
    }

    match store::append_student(session.backend.as_ref(), &session.config, &record, program) {
        Ok(stored_under) => ok(
            &req.id,
            json!({ "batch": record.batch, "program": stored_under }),
        ),
        Err(e) => store_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.add" => Some(handle_students_add(state, req)),
        _ => None,
    }
}
