use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_edumanagerd");
    let mut child = Command::new(exe)
        .env("EDUMANAGERD_SIM_DELAY_MS", "0")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn edumanagerd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    if value.get("ok").and_then(|v| v.as_bool()) == Some(false) {
        let code = value
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        assert_ne!(
            code, "not_implemented",
            "unexpected unknown method for {}",
            method
        );
    }
    value
}

fn poll_success(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    submit: &serde_json::Value,
) -> serde_json::Value {
    let job_id = submit
        .get("result")
        .and_then(|v| v.get("jobId"))
        .and_then(|v| v.as_str())
        .expect("jobId")
        .to_string();
    let polled = request(stdin, reader, id, "jobs.get", json!({ "jobId": job_id }));
    assert_eq!(
        polled
            .get("result")
            .and_then(|v| v.get("state"))
            .and_then(|v| v.as_str()),
        Some("success"),
        "zero-delay job should resolve on first poll"
    );
    polled
}

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request(&mut stdin, &mut reader, "1", "health", json!({}));
    let _ = request(&mut stdin, &mut reader, "2", "nav.items", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "3",
        "nav.resolve",
        json!({ "path": "/students" }),
    );
    let _ = request(&mut stdin, &mut reader, "4", "dashboard.stats", json!({}));
    let _ = request(&mut stdin, &mut reader, "5", "dashboard.charts", json!({}));
    let _ = request(&mut stdin, &mut reader, "6", "students.list", json!({}));
    let created = request(
        &mut stdin,
        &mut reader,
        "7",
        "students.create",
        json!({
            "firstName": "Aarav",
            "lastName": "Mehta",
            "studentId": "ST900",
            "dateOfBirth": "2012-06-01",
            "class": "5",
            "section": "A",
            "gender": "male",
            "parentName": "Nikhil Mehta",
            "parentPhone": "+91 90000 00001"
        }),
    );
    let _ = poll_success(&mut stdin, &mut reader, "7a", &created);
    let _ = request(
        &mut stdin,
        &mut reader,
        "8",
        "students.importTemplate",
        json!({}),
    );
    let imported = request(
        &mut stdin,
        &mut reader,
        "9",
        "students.import",
        json!({ "fileName": "roster.csv" }),
    );
    let _ = poll_success(&mut stdin, &mut reader, "9a", &imported);
    let staff = request(
        &mut stdin,
        &mut reader,
        "10",
        "staff.create",
        json!({
            "firstName": "Meena",
            "lastName": "Iyer",
            "employeeId": "EMP042",
            "phoneNumber": "+91 90000 00002",
            "email": "meena.iyer@edumanager.com",
            "department": "academic",
            "position": "Mathematics Teacher",
            "dateOfJoining": "2022-06-15"
        }),
    );
    let _ = poll_success(&mut stdin, &mut reader, "10a", &staff);
    let _ = request(&mut stdin, &mut reader, "11", "fees.student", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "12",
        "fees.totals",
        json!({ "studentId": "ST001", "selectedCategories": ["Tuition Fee"] }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "13",
        "auth.demoCredentials",
        json!({}),
    );
    let login = request(
        &mut stdin,
        &mut reader,
        "14",
        "auth.login",
        json!({ "email": "admin@edumanager.com", "password": "admin123" }),
    );
    let _ = poll_success(&mut stdin, &mut reader, "14a", &login);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn unknown_methods_get_the_catch_all() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    // Unwired UI surfaces have no methods behind them.
    for (id, method) in [
        ("1", "students.delete"),
        ("2", "students.update"),
        ("3", "fees.collect"),
        ("4", "expenses.list"),
    ] {
        let payload = json!({ "id": id, "method": method, "params": {} });
        writeln!(stdin, "{}", payload).expect("write request");
        stdin.flush().expect("flush request");
        let mut line = String::new();
        reader.read_line(&mut line).expect("read response line");
        let value: serde_json::Value =
            serde_json::from_str(line.trim()).expect("parse response json");
        assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(
            value
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str()),
            Some("not_implemented"),
            "{} should be unrouted",
            method
        );
    }

    drop(stdin);
    let _ = child.wait();
}
