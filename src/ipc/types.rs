use serde::Deserialize;

use crate::config::Config;
use crate::sheets::SheetsBackend;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A wired-up connection to the remote store. Absent when startup could
/// not assemble configuration or credentials; requests then answer with an
/// auth error instead of the process exiting.
pub struct Session {
    pub config: Config,
    pub backend: Box<dyn SheetsBackend>,
}

pub struct AppState {
    pub session: Option<Session>,
}
