use rusqlite::Connection;
use serde_json::json;

use crate::fees::{self, FeeLineItem, FeeStatus};
use crate::ipc::error::ok;
use crate::ipc::helpers::{required_str, str_or, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::roster;

use super::students::load_students;

const PAYMENT_METHODS: &[&str] = &["cash", "card", "upi", "bank_transfer", "cheque"];

/// The student the fee-collection screen opens on.
const DEFAULT_STUDENT_NO: &str = "ST001";

fn load_fee_items(conn: &Connection, student_no: &str) -> Result<Vec<FeeLineItem>, HandlerErr> {
    let mut stmt = conn
        .prepare(
            "SELECT category, amount, status, due_date, paid_amount
             FROM fee_items
             WHERE student_no = ?
             ORDER BY sort_order",
        )
        .map_err(HandlerErr::db)?;
    let rows: Vec<(String, i64, String, String, Option<i64>)> = stmt
        .query_map([student_no], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?))
        })
        .and_then(|it| it.collect::<Result<Vec<_>, _>>())
        .map_err(HandlerErr::db)?;

    rows.into_iter()
        .map(|(category, amount, status, due_date, paid_amount)| {
            let status = FeeStatus::parse(&status).ok_or_else(|| {
                HandlerErr::new(
                    "db_query_failed",
                    format!("unknown fee status for {}: {}", category, status),
                )
            })?;
            Ok(FeeLineItem {
                category,
                amount,
                status,
                due_date,
                paid_amount,
            })
        })
        .collect()
}

fn fee_item_json(it: &FeeLineItem) -> serde_json::Value {
    let mut v = json!({
        "category": it.category,
        "amount": it.amount,
        "status": it.status.as_str(),
        "dueDate": it.due_date,
        "outstanding": it.outstanding(),
        "selectable": it.selectable(),
    });
    if let Some(paid) = it.paid_amount {
        v["paidAmount"] = json!(paid);
    }
    v
}

fn handle_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    match student(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

/// Resolve the student shown on the fee-collection screen: the search box
/// uses the same predicate as the student list (first match wins); an empty
/// query opens on the default student.
fn student(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let query = str_or(params, "query", "").to_string();

    let all = load_students(&state.db)?;
    let found = if query.is_empty() {
        all.iter().find(|s| s.student_id == DEFAULT_STUDENT_NO)
    } else {
        all.iter().find(|s| roster::matches(s, &query, "all", "all"))
    };
    let Some(student) = found else {
        return Err(HandlerErr::not_found(format!(
            "no student matches: {}",
            query
        )));
    };

    let items = load_fee_items(&state.db, &student.student_id)?;
    let structure: Vec<serde_json::Value> = items.iter().map(fee_item_json).collect();

    Ok(json!({
        "student": student,
        "feeStructure": structure,
        "totalDue": fees::total_due(&items),
        "paymentMethods": PAYMENT_METHODS,
    }))
}

fn handle_totals(state: &mut AppState, req: &Request) -> serde_json::Value {
    match totals(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn totals(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let student_no = required_str(params, "studentId")?;
    let selected: Vec<String> = params
        .get("selectedCategories")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let exists = load_students(&state.db)?
        .iter()
        .any(|s| s.student_id == student_no);
    if !exists {
        return Err(HandlerErr::not_found(format!(
            "student not found: {}",
            student_no
        )));
    }

    let items = load_fee_items(&state.db, &student_no)?;
    Ok(json!({
        "totalDue": fees::total_due(&items),
        "totalSelected": fees::total_selected(&items, &selected),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "fees.student" => Some(handle_student(state, req)),
        "fees.totals" => Some(handle_totals(state, req)),
        _ => None,
    }
}
