use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::{required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};

struct NavChild {
    title: &'static str,
    path: &'static str,
}

struct NavItem {
    title: &'static str,
    path: &'static str,
    badge: Option<&'static str>,
    children: &'static [NavChild],
}

/// The sidebar tree. Paths under a parent that have no view of their own
/// (e.g. `/staff/salary`) still resolve through the `/fees/*`-style rules
/// below or fall through to `notFound`.
const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/",
        badge: None,
        children: &[],
    },
    NavItem {
        title: "Students",
        path: "/students",
        badge: None,
        children: &[
            NavChild { title: "All Students", path: "/students" },
            NavChild { title: "Add Student", path: "/students/add" },
            NavChild { title: "Bulk Import", path: "/students/import" },
        ],
    },
    NavItem {
        title: "Staff",
        path: "/staff",
        badge: None,
        children: &[
            NavChild { title: "Staff Directory", path: "/staff" },
            NavChild { title: "Add Staff", path: "/staff/add" },
            NavChild { title: "Salary Management", path: "/staff/salary" },
        ],
    },
    NavItem {
        title: "Fees",
        path: "/fees",
        badge: Some("12"),
        children: &[
            NavChild { title: "Fee Structures", path: "/fees/structures" },
            NavChild { title: "Fee Collection", path: "/fees/collection" },
            NavChild { title: "Outstanding Fees", path: "/fees/outstanding" },
        ],
    },
    NavItem {
        title: "Expenses",
        path: "/expenses",
        badge: None,
        children: &[
            NavChild { title: "Add Expense", path: "/expenses/add" },
            NavChild { title: "Categories", path: "/expenses/categories" },
            NavChild { title: "Approvals", path: "/expenses/approvals" },
        ],
    },
    NavItem {
        title: "Reports",
        path: "/reports",
        badge: None,
        children: &[
            NavChild { title: "Financial Reports", path: "/reports/financial" },
            NavChild { title: "Academic Reports", path: "/reports/academic" },
            NavChild { title: "Custom Reports", path: "/reports/custom" },
        ],
    },
    NavItem {
        title: "Academic Year",
        path: "/academic-year",
        badge: None,
        children: &[],
    },
    NavItem {
        title: "Settings",
        path: "/settings",
        badge: None,
        children: &[
            NavChild { title: "Profile", path: "/settings/profile" },
            NavChild { title: "School Settings", path: "/settings/school" },
            NavChild { title: "User Management", path: "/settings/users" },
        ],
    },
];

fn handle_items(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let items: Vec<serde_json::Value> = NAV_ITEMS
        .iter()
        .map(|item| {
            let children: Vec<serde_json::Value> = item
                .children
                .iter()
                .map(|c| json!({ "title": c.title, "path": c.path }))
                .collect();
            let mut v = json!({ "title": item.title, "path": item.path });
            if let Some(badge) = item.badge {
                v["badge"] = json!(badge);
            }
            if !children.is_empty() {
                v["children"] = json!(children);
            }
            v
        })
        .collect();
    ok(&req.id, json!({ "items": items }))
}

/// Path → view, mirroring the app's route table. `/fees` takes a wildcard;
/// everything unknown is the not-found view.
fn resolve_view(path: &str) -> (&'static str, Option<&'static str>) {
    match path {
        "/login" => ("login", None),
        "/" => ("dashboard", None),
        "/students" => ("studentList", None),
        "/students/add" => ("addStudent", None),
        "/students/import" => ("importStudents", None),
        "/staff" => ("placeholder", Some("Staff Management - Coming Soon")),
        "/staff/add" => ("addStaff", None),
        "/expenses" => ("placeholder", Some("Expense Management - Coming Soon")),
        "/reports" => ("placeholder", Some("Reports - Coming Soon")),
        "/academic-year" => ("placeholder", Some("Academic Year Management - Coming Soon")),
        "/settings" => ("placeholder", Some("Settings - Coming Soon")),
        p if p == "/fees" || p.starts_with("/fees/") => ("feeCollection", None),
        _ => ("notFound", None),
    }
}

/// The top-level nav entry to highlight: exact match for the dashboard,
/// prefix match for everything else.
fn active_path(path: &str) -> Option<&'static str> {
    if path == "/" {
        return Some("/");
    }
    NAV_ITEMS
        .iter()
        .map(|item| item.path)
        .find(|p| *p != "/" && (path == *p || path.starts_with(&format!("{}/", p))))
}

fn handle_resolve(_state: &mut AppState, req: &Request) -> serde_json::Value {
    match resolve(&req.params) {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    }
}

fn resolve(params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let path = required_str(params, "path")?;
    let (view, title) = resolve_view(&path);

    let mut result = json!({
        "path": path,
        "view": view,
        "activePath": active_path(&path),
    });
    if let Some(t) = title {
        result["title"] = json!(t);
    }
    Ok(result)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "nav.items" => Some(handle_items(state, req)),
        "nav.resolve" => Some(handle_resolve(state, req)),
        _ => None,
    }
}
