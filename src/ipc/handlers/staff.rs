use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{require_date, required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};

const CREATE_REQUIRED: &[&str] = &[
    "firstName",
    "lastName",
    "employeeId",
    "phoneNumber",
    "email",
    "department",
    "position",
    "dateOfJoining",
];

const DEPARTMENTS: &[&str] = &[
    "academic",
    "administration",
    "finance",
    "maintenance",
    "transport",
    "library",
    "sports",
];

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    match create(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn create(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let mut fields = serde_json::Map::new();
    for key in CREATE_REQUIRED {
        fields.insert(key.to_string(), json!(required_str(params, key)?));
    }
    require_date(
        fields["dateOfJoining"].as_str().unwrap_or_default(),
        "dateOfJoining",
    )?;

    let department = fields["department"].as_str().unwrap_or_default();
    if !DEPARTMENTS.contains(&department) {
        return Err(HandlerErr::bad_params(format!(
            "unknown department: {}",
            department
        )));
    }

    let first = fields["firstName"].as_str().unwrap_or_default().to_string();
    let last = fields["lastName"].as_str().unwrap_or_default().to_string();

    let result = json!({ "submitted": fields });
    let notification = json!({
        "title": "Staff Member Added Successfully",
        "description": format!("{} {} has been registered.", first, last)
    });
    let job_id = state
        .jobs
        .submit("submit", state.config.submit_delay(), result, notification);

    Ok(json!({ "jobId": job_id, "state": "pending" }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "staff.create" => Some(handle_create(state, req)),
        _ => None,
    }
}
