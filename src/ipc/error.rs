use serde_json::json;

use crate::error::StoreError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Envelope for the typed store errors; the code is stable per variant so
/// the UI can branch on it.
pub fn store_err(id: &str, e: &StoreError) -> serde_json::Value {
    err(id, e.code(), e.to_string(), None)
}

/// Answer for any method hit while no session is wired up.
pub fn no_session(id: &str) -> serde_json::Value {
    err(
        id,
        "auth_failed",
        "spreadsheet service connection is not configured; check credentials and spreadsheet ids",
        None,
    )
}
