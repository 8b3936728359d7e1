//! GitBrowser widget host — serves widget timelines over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"favorites.timeline", "params":{"surface":"medium"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see absorbed snapshot failures.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use gitbrowser_widgets::app::WidgetApp;
use gitbrowser_widgets::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

fn respond(out: &mut impl Write, response: Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let app = match WidgetApp::from_env() {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize widget host");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(app_group = %app.config.app_group, "widget host ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    if respond(&mut out, ready).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));

                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        tracing::debug!(method, error = %err, "request failed");
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if respond(&mut out, response).is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
