//! The sample datasets the dashboard runs on.
//!
//! Relational entities (students, fee structures, sign-in users) are seeded
//! into the in-memory store at startup; the dashboard stat cards and chart
//! series are presentation blobs served as-is.

use serde_json::{json, Value};

use crate::fees::{FeeLineItem, FeeStatus};
use crate::roster::Student;

pub struct DemoUser {
    pub email: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

/// Credentials shown on the login screen; sign-in succeeds regardless.
pub const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        email: "admin@edumanager.com",
        password: "admin123",
        role: "admin",
    },
    DemoUser {
        email: "principal@edumanager.com",
        password: "principal123",
        role: "principal",
    },
    DemoUser {
        email: "teacher@edumanager.com",
        password: "teacher123",
        role: "teacher",
    },
];

pub fn students() -> Vec<Student> {
    let rows = [
        (
            "1", "ST001", "Rahul Sharma", "10", "A", "+91 98765 43210", "active", "paid",
            "2023-04-15",
        ),
        (
            "2", "ST002", "Priya Patel", "9", "B", "+91 87654 32109", "active", "pending",
            "2023-03-20",
        ),
        (
            "3", "ST003", "Amit Kumar", "8", "A", "+91 76543 21098", "active", "overdue",
            "2023-05-10",
        ),
        (
            "4", "ST004", "Sneha Reddy", "7", "C", "+91 65432 10987", "active", "paid",
            "2023-02-28",
        ),
        (
            "5", "ST005", "Arjun Singh", "6", "B", "+91 54321 09876", "inactive", "pending",
            "2023-01-15",
        ),
    ];

    rows.iter()
        .map(
            |(id, student_id, name, class, section, phone, status, fee_status, admitted)| Student {
                id: id.to_string(),
                student_id: student_id.to_string(),
                name: name.to_string(),
                class: class.to_string(),
                section: section.to_string(),
                phone: phone.to_string(),
                status: status.to_string(),
                fee_status: fee_status.to_string(),
                admission_date: admitted.to_string(),
            },
        )
        .collect()
}

fn item(
    category: &str,
    amount: i64,
    status: FeeStatus,
    due_date: &str,
    paid_amount: Option<i64>,
) -> FeeLineItem {
    FeeLineItem {
        category: category.to_string(),
        amount,
        status,
        due_date: due_date.to_string(),
        paid_amount,
    }
}

/// Per-student fee structures, keyed by student number.
pub fn fee_structures() -> Vec<(&'static str, Vec<FeeLineItem>)> {
    vec![
        (
            "ST001",
            vec![
                item("Tuition Fee", 15000, FeeStatus::Pending, "2024-01-31", None),
                item(
                    "Transport Fee",
                    3000,
                    FeeStatus::Paid,
                    "2024-01-31",
                    Some(3000),
                ),
                item(
                    "Laboratory Fee",
                    2000,
                    FeeStatus::Partial,
                    "2024-01-31",
                    Some(1000),
                ),
                item("Library Fee", 1500, FeeStatus::Pending, "2024-01-31", None),
                item("Sports Fee", 2500, FeeStatus::Pending, "2024-01-31", None),
            ],
        ),
        (
            "ST002",
            vec![
                item("Tuition Fee", 12000, FeeStatus::Pending, "2024-01-31", None),
                item(
                    "Transport Fee",
                    2800,
                    FeeStatus::Paid,
                    "2024-01-31",
                    Some(2800),
                ),
                item("Library Fee", 1500, FeeStatus::Pending, "2024-01-31", None),
            ],
        ),
        (
            "ST003",
            vec![
                item("Tuition Fee", 11000, FeeStatus::Pending, "2023-12-31", None),
                item(
                    "Sports Fee",
                    2500,
                    FeeStatus::Partial,
                    "2023-12-31",
                    Some(500),
                ),
            ],
        ),
        (
            "ST004",
            vec![
                item(
                    "Tuition Fee",
                    10000,
                    FeeStatus::Paid,
                    "2024-01-31",
                    Some(10000),
                ),
                item(
                    "Transport Fee",
                    2500,
                    FeeStatus::Paid,
                    "2024-01-31",
                    Some(2500),
                ),
            ],
        ),
        (
            "ST005",
            vec![
                item("Tuition Fee", 9500, FeeStatus::Pending, "2024-01-31", None),
                item(
                    "Laboratory Fee",
                    1800,
                    FeeStatus::Partial,
                    "2024-01-31",
                    Some(800),
                ),
            ],
        ),
    ]
}

/// The four dashboard stat cards.
pub fn stat_cards() -> Value {
    json!([
        {
            "title": "Total Students",
            "value": "1,247",
            "change": 12.5,
            "changeType": "increase",
            "trend": "from last month",
            "description": "Across all branches"
        },
        {
            "title": "Monthly Revenue",
            "value": "₹2,45,680",
            "change": 8.2,
            "changeType": "increase",
            "trend": "this month",
            "description": "Fee collection + other income"
        },
        {
            "title": "Outstanding Fees",
            "value": "₹45,290",
            "change": 5.1,
            "changeType": "decrease",
            "trend": "from last week",
            "description": "23 students pending"
        },
        {
            "title": "Active Staff",
            "value": "89",
            "change": 2.4,
            "changeType": "increase",
            "trend": "total staff",
            "description": "Teaching + non-teaching"
        }
    ])
}

/// Chart series for the dashboard: revenue vs expenses, enrollment split,
/// and collected/pending percentages by fee category.
pub fn chart_series() -> Value {
    json!({
        "revenueTrend": {
            "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            "revenue": [180000, 220000, 195000, 250000, 275000, 245000],
            "expenses": [120000, 140000, 135000, 160000, 155000, 170000]
        },
        "studentDistribution": {
            "labels": ["Class 1-5", "Class 6-8", "Class 9-10", "Class 11-12"],
            "counts": [320, 285, 195, 150]
        },
        "feeCollection": {
            "labels": ["Tuition Fee", "Transport", "Books", "Uniform", "Activities", "Others"],
            "collectedPercent": [85, 78, 92, 65, 88, 75],
            "pendingPercent": [15, 22, 8, 35, 12, 25]
        }
    })
}
