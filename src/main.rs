use std::io::{self, BufRead, Write};

use enrolld::config::Config;
use enrolld::ipc::{self, AppState, Session};
use enrolld::sheets::RestBackend;

fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut state = bootstrap();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // No request id to echo back.
                let reply = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() },
                });
                let _ = writeln!(stdout, "{reply}");
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}

/// Logs go to stderr; stdout carries nothing but response lines.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Wire up the remote session from the environment. A misconfigured or
/// credential-less start still serves requests; they answer with an auth
/// error until the daemon is restarted with working settings.
fn bootstrap() -> AppState {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "starting without a spreadsheet session");
            return AppState { session: None };
        }
    };

    match RestBackend::from_key_file(&config.service_account_key) {
        Ok(backend) => {
            tracing::info!(client = %backend.client_email(), "spreadsheet session ready");
            AppState {
                session: Some(Session {
                    config,
                    backend: Box::new(backend),
                }),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "starting without a spreadsheet session");
            AppState { session: None }
        }
    }
}
