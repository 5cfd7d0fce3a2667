use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::mock;

fn handle_stats(_state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "cards": mock::stat_cards() }))
}

fn handle_charts(_state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, mock::chart_series())
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.stats" => Some(handle_stats(state, req)),
        "dashboard.charts" => Some(handle_charts(state, req)),
        _ => None,
    }
}
