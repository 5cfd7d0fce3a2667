use rusqlite::OptionalExtension;
use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    match login(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn login(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let email = required_str(params, "email")?;
    let _password = required_str(params, "password")?;
    let remember_me = params
        .get("rememberMe")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    // Sign-in always succeeds; the credential table only decides the role.
    let role: Option<String> = state
        .db
        .query_row("SELECT role FROM users WHERE email = ?", [&email], |r| {
            r.get(0)
        })
        .optional()
        .map_err(HandlerErr::db)?;

    let result = json!({
        "user": {
            "email": email,
            "role": role.unwrap_or_else(|| "admin".to_string()),
            "rememberMe": remember_me
        }
    });
    let notification = json!({
        "title": "Login Successful",
        "description": "Welcome to EduManager Portal"
    });
    let job_id = state
        .jobs
        .submit("login", state.config.login_delay(), result, notification);

    Ok(json!({ "jobId": job_id, "state": "pending" }))
}

fn handle_demo_credentials(state: &mut AppState, req: &Request) -> serde_json::Value {
    match demo_credentials(state) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn demo_credentials(state: &mut AppState) -> Result<serde_json::Value, HandlerErr> {
    let mut stmt = state
        .db
        .prepare("SELECT email, password, role FROM users ORDER BY rowid")
        .map_err(HandlerErr::db)?;
    let rows = stmt
        .query_map([], |r| {
            let email: String = r.get(0)?;
            let password: String = r.get(1)?;
            let role: String = r.get(2)?;
            Ok(json!({ "email": email, "password": password, "role": role }))
        })
        .and_then(|it| it.collect::<Result<Vec<_>, _>>())
        .map_err(HandlerErr::db)?;

    Ok(json!({ "credentials": rows }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "auth.login" => Some(handle_login(state, req)),
        "auth.demoCredentials" => Some(handle_demo_credentials(state, req)),
        _ => None,
    }
}
