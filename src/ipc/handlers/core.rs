use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    let students: Result<i64, _> = state
        .db
        .query_row("SELECT COUNT(*) FROM students", [], |r| r.get(0));
    match students {
        Ok(count) => ok(
            &req.id,
            json!({
                "version": env!("CARGO_PKG_VERSION"),
                "store": "memory",
                "students": count
            }),
        ),
        Err(e) => err(&req.id, "db_query_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        _ => None,
    }
}
