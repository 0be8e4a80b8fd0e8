use std::path::PathBuf;

use anyhow::Context;

use crate::directory::Program;

pub const ENV_IELTS_SPREADSHEET_ID: &str = "ENROLLD_IELTS_SPREADSHEET_ID";
pub const ENV_APTIS_SPREADSHEET_ID: &str = "ENROLLD_APTIS_SPREADSHEET_ID";
pub const ENV_SERVICE_ACCOUNT_KEY: &str = "ENROLLD_SERVICE_ACCOUNT_KEY";

/// Which remote documents back the two programs, and where the service
/// account key lives. Read once at startup; a request never re-reads the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub ielts_spreadsheet_id: String,
    pub aptis_spreadsheet_id: String,
    pub service_account_key: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let ielts_spreadsheet_id = std::env::var(ENV_IELTS_SPREADSHEET_ID)
            .with_context(|| format!("{ENV_IELTS_SPREADSHEET_ID} is not set"))?;
        let aptis_spreadsheet_id = std::env::var(ENV_APTIS_SPREADSHEET_ID)
            .with_context(|| format!("{ENV_APTIS_SPREADSHEET_ID} is not set"))?;
        let service_account_key = std::env::var(ENV_SERVICE_ACCOUNT_KEY)
            .map(PathBuf::from)
            .with_context(|| format!("{ENV_SERVICE_ACCOUNT_KEY} is not set"))?;
        Ok(Config {
            ielts_spreadsheet_id,
            aptis_spreadsheet_id,
            service_account_key,
        })
    }

    pub fn spreadsheet_id(&self, program: Program) -> &str {
        match program {
            Program::Ielts => &self.ielts_spreadsheet_id,
            Program::Aptis => &self.aptis_spreadsheet_id,
        }
    }
}
