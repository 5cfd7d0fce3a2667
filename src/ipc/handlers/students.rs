use rusqlite::Connection;
use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{require_date, required_str, str_or, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::roster::{self, Student};

/// The full roster in seed order; filtering happens in memory on every call.
pub fn load_students(conn: &Connection) -> Result<Vec<Student>, HandlerErr> {
    let mut stmt = conn
        .prepare(
            "SELECT id, student_no, name, class, section, phone,
                    status, fee_status, admission_date
             FROM students
             ORDER BY sort_order",
        )
        .map_err(HandlerErr::db)?;
    stmt.query_map([], |r| {
        Ok(Student {
            id: r.get(0)?,
            student_id: r.get(1)?,
            name: r.get(2)?,
            class: r.get(3)?,
            section: r.get(4)?,
            phone: r.get(5)?,
            status: r.get(6)?,
            fee_status: r.get(7)?,
            admission_date: r.get(8)?,
        })
    })
    .and_then(|it| it.collect::<Result<Vec<_>, _>>())
    .map_err(HandlerErr::db)
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    match list(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn list(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let query = str_or(params, "query", "").to_string();
    let class_filter = str_or(params, "class", "all").to_string();
    let status_filter = str_or(params, "status", "all").to_string();

    let all = load_students(&state.db)?;
    let total = all.len();
    let students: Vec<&Student> = all
        .iter()
        .filter(|s| roster::matches(s, &query, &class_filter, &status_filter))
        .collect();

    let matched = students.len();
    Ok(json!({
        "students": students,
        "matched": matched,
        "total": total
    }))
}

const CREATE_REQUIRED: &[&str] = &[
    "firstName",
    "lastName",
    "studentId",
    "dateOfBirth",
    "class",
    "section",
    "gender",
    "parentName",
    "parentPhone",
];

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    match create(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

/// Registration is a simulated submission: validate, then hand the UI a
/// pending job that resolves to a success toast. The roster is not touched.
fn create(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let mut fields = serde_json::Map::new();
    for key in CREATE_REQUIRED {
        fields.insert(key.to_string(), json!(required_str(params, key)?));
    }
    require_date(
        fields["dateOfBirth"].as_str().unwrap_or_default(),
        "dateOfBirth",
    )?;

    let first = fields["firstName"].as_str().unwrap_or_default().to_string();
    let last = fields["lastName"].as_str().unwrap_or_default().to_string();

    let result = json!({ "submitted": fields });
    let notification = json!({
        "title": "Student Added Successfully",
        "description": format!("{} {} has been registered.", first, last)
    });
    let job_id = state
        .jobs
        .submit("submit", state.config.submit_delay(), result, notification);

    Ok(json!({ "jobId": job_id, "state": "pending" }))
}

fn handle_import(state: &mut AppState, req: &Request) -> serde_json::Value {
    let file_name = match required_str(&req.params, "fileName") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };

    if !file_name.ends_with(".xlsx") && !file_name.ends_with(".csv") {
        return err(
            &req.id,
            "invalid_file_format",
            "Please upload an Excel (.xlsx) or CSV file.",
            Some(json!({ "fileName": file_name })),
        );
    }

    // The file is never opened; the import resolves to a canned summary.
    let result = json!({
        "fileName": file_name,
        "total": 125,
        "successful": 120,
        "failed": 5,
        "errors": [
            "Row 15: Missing required field \"Student ID\"",
            "Row 32: Invalid date format in \"Date of Birth\"",
            "Row 67: Duplicate Student ID \"ST2024001\"",
            "Row 89: Invalid class \"Class 13\"",
            "Row 103: Missing parent contact information"
        ]
    });
    let notification = json!({
        "title": "Upload Complete",
        "description": "Student data has been processed successfully."
    });
    let job_id = state
        .jobs
        .submit("import", state.config.import_delay(), result, notification);

    ok(&req.id, json!({ "jobId": job_id, "state": "pending" }))
}

fn handle_import_template(_state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "columns": [
                "Student ID",
                "First Name",
                "Last Name",
                "Class",
                "Section",
                "Date of Birth",
                "Parent Name",
                "Parent Phone"
            ],
            "guidelines": {
                "dateFormat": "Use YYYY-MM-DD format (e.g. 2024-01-15)",
                "studentId": "Must be unique across all students",
                "classFormat": "Use numbers 1-12 for classes",
                "phoneNumbers": "Include country code (+91 for India)"
            },
            "notification": {
                "title": "Template Downloaded",
                "description": "Excel template has been downloaded to your device."
            }
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        "students.create" => Some(handle_create(state, req)),
        "students.import" => Some(handle_import(state, req)),
        "students.importTemplate" => Some(handle_import_template(state, req)),
        _ => None,
    }
}
