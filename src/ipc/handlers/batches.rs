use serde_json::json;

use crate::directory::{self, Program};
use crate::ipc::error::{err, no_session, ok, store_err};
use crate::ipc::types::{AppState, Request};
use crate::store;

fn handle_batches_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(session) = state.session.as_ref() else {
        return no_session(&req.id);
    };

    let name = match req.params.get("name").and_then(|v| v.as_str()) {
        Some(v) => v.trim().to_string(),
        None => return err(&req.id, "bad_params", "missing name", None),
    };
    if name.is_empty() {
        return err(&req.id, "bad_params", "name must not be empty", None);
    }
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

    match store::create_batch(session.backend.as_ref(), &session.config, &name, program) {
        Ok(batch) => ok(
            &req.id,
            json!({ "name": batch.name, "program": batch.program }),
        ),
        Err(e) => store_err(&req.id, &e),
    }
}

fn handle_batches_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(session) = state.session.as_ref() else {
        return no_session(&req.id);
    };

    let batches = directory::list_batches(session.backend.as_ref(), &session.config);
    ok(&req.id, json!({ "batches": batches }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "batches.create" => Some(handle_batches_create(state, req)),
        "batches.list" => Some(handle_batches_list(state, req)),
        _ => None,
    }
}
