use std::time::Instant;

use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::jobs::Phase;

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    match get(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn get(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let job_id = required_str(params, "jobId")?;
    let Some(job) = state.jobs.get(&job_id) else {
        return Err(HandlerErr::not_found(format!("job not found: {}", job_id)));
    };

    Ok(match job.phase_at(Instant::now()) {
        Phase::Pending { progress } => json!({
            "jobId": job_id,
            "kind": job.kind,
            "state": "pending",
            "progress": progress,
        }),
        Phase::Success {
            result,
            notification,
        } => json!({
            "jobId": job_id,
            "kind": job.kind,
            "state": "success",
            "result": result,
            "notification": notification,
        }),
    })
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "jobs.get" => Some(handle_get(state, req)),
        _ => None,
    }
}
