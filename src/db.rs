use rusqlite::Connection;

use crate::mock;

/// Open the in-memory store and seed it with the sample datasets.
///
/// Nothing is ever written to disk; the store lives and dies with the
/// process. Handlers treat it as read-only after seeding.
pub fn open_memory_db() -> anyhow::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute(
        "CREATE TABLE users(
            email TEXT PRIMARY KEY,
            password TEXT NOT NULL,
            role TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE students(
            id TEXT PRIMARY KEY,
            student_no TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            class TEXT NOT NULL,
            section TEXT NOT NULL,
            phone TEXT NOT NULL,
            status TEXT NOT NULL,
            fee_status TEXT NOT NULL,
            admission_date TEXT NOT NULL,
            sort_order INTEGER NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_students_class ON students(class)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_students_sort ON students(sort_order)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE fee_items(
            student_no TEXT NOT NULL,
            category TEXT NOT NULL,
            amount INTEGER NOT NULL,
            status TEXT NOT NULL,
            due_date TEXT NOT NULL,
            paid_amount INTEGER,
            sort_order INTEGER NOT NULL,
            PRIMARY KEY(student_no, category),
            FOREIGN KEY(student_no) REFERENCES students(student_no)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_fee_items_student ON fee_items(student_no, sort_order)",
        [],
    )?;

    seed(&conn)?;
    Ok(conn)
}

fn seed(conn: &Connection) -> anyhow::Result<()> {
    for user in mock::DEMO_USERS.iter() {
        conn.execute(
            "INSERT INTO users(email, password, role) VALUES(?, ?, ?)",
            (user.email, user.password, user.role),
        )?;
    }

    for (order, s) in mock::students().iter().enumerate() {
        conn.execute(
            "INSERT INTO students(
                id, student_no, name, class, section, phone,
                status, fee_status, admission_date, sort_order
             ) VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            (
                &s.id,
                &s.student_id,
                &s.name,
                &s.class,
                &s.section,
                &s.phone,
                &s.status,
                &s.fee_status,
                &s.admission_date,
                order as i64,
            ),
        )?;
    }

    for (student_no, items) in mock::fee_structures() {
        for (order, it) in items.iter().enumerate() {
            conn.execute(
                "INSERT INTO fee_items(
                    student_no, category, amount, status, due_date, paid_amount, sort_order
                 ) VALUES(?, ?, ?, ?, ?, ?, ?)",
                (
                    student_no,
                    &it.category,
                    it.amount,
                    it.status.as_str(),
                    &it.due_date,
                    it.paid_amount,
                    order as i64,
                ),
            )?;
        }
    }

    Ok(())
}
