//! Student records and the list-view filter.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    /// School-assigned student number, e.g. `ST001`.
    pub student_id: String,
    pub name: String,
    pub class: String,
    pub section: String,
    pub phone: String,
    /// `active` | `inactive` | `graduated`
    pub status: String,
    /// `paid` | `pending` | `overdue`
    pub fee_status: String,
    pub admission_date: String,
}

/// The student-list filter, evaluated against every record on each call.
///
/// Text search is a case-insensitive substring match on name and student
/// number; phone numbers match the raw query as typed. Class and status
/// filters are exact, with `"all"` meaning no constraint.
pub fn matches(student: &Student, query: &str, class_filter: &str, status_filter: &str) -> bool {
    let q = query.to_lowercase();
    let matches_search = student.name.to_lowercase().contains(&q)
        || student.student_id.to_lowercase().contains(&q)
        || student.phone.contains(query);
    let matches_class = class_filter == "all" || student.class == class_filter;
    let matches_status = status_filter == "all" || student.status == status_filter;

    matches_search && matches_class && matches_status
}
