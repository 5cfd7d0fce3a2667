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
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn error_code(value: &serde_json::Value) -> Option<&str> {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
}

#[test]
fn only_xlsx_and_csv_names_are_accepted() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    for (id, file_name) in [
        ("1", "students.pdf"),
        ("2", "students.xls"),
        ("3", "roster"),
        // The check is a literal suffix match, so uppercase extensions fail too.
        ("4", "Students.XLSX"),
    ] {
        let value = request(
            &mut stdin,
            &mut reader,
            id,
            "students.import",
            json!({ "fileName": file_name }),
        );
        assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(
            error_code(&value),
            Some("invalid_file_format"),
            "{} should be rejected",
            file_name
        );
        assert_eq!(
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str()),
            Some("Please upload an Excel (.xlsx) or CSV file.")
        );
    }

    for (id, file_name) in [("5", "roster.csv"), ("6", "students 2024.xlsx")] {
        let value = request(
            &mut stdin,
            &mut reader,
            id,
            "students.import",
            json!({ "fileName": file_name }),
        );
        assert_eq!(
            value.get("ok").and_then(|v| v.as_bool()),
            Some(true),
            "{} should be accepted",
            file_name
        );
        assert_eq!(
            value["result"].get("state").and_then(|v| v.as_str()),
            Some("pending")
        );
    }
}

#[test]
fn import_resolves_to_the_fabricated_summary() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let submitted = request(
        &mut stdin,
        &mut reader,
        "1",
        "students.import",
        json!({ "fileName": "roster.csv" }),
    );
    let job_id = submitted["result"]
        .get("jobId")
        .and_then(|v| v.as_str())
        .expect("jobId")
        .to_string();

    let polled = request(
        &mut stdin,
        &mut reader,
        "2",
        "jobs.get",
        json!({ "jobId": job_id }),
    );
    let result = &polled["result"];
    assert_eq!(result.get("state").and_then(|v| v.as_str()), Some("success"));
    assert_eq!(result.get("kind").and_then(|v| v.as_str()), Some("import"));

    // The summary is canned no matter what the file held.
    let summary = &result["result"];
    assert_eq!(summary.get("total").and_then(|v| v.as_i64()), Some(125));
    assert_eq!(summary.get("successful").and_then(|v| v.as_i64()), Some(120));
    assert_eq!(summary.get("failed").and_then(|v| v.as_i64()), Some(5));
    let errors = summary.get("errors").and_then(|v| v.as_array()).expect("errors");
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors[0].as_str(),
        Some("Row 15: Missing required field \"Student ID\"")
    );

    assert_eq!(
        result["notification"].get("title").and_then(|v| v.as_str()),
        Some("Upload Complete")
    );
}

#[test]
fn missing_file_name_is_bad_params() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let value = request(&mut stdin, &mut reader, "1", "students.import", json!({}));
    assert_eq!(error_code(&value), Some("bad_params"));
}

#[test]
fn unknown_job_poll_is_not_found() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let value = request(
        &mut stdin,
        &mut reader,
        "1",
        "jobs.get",
        json!({ "jobId": "no-such-job" }),
    );
    assert_eq!(error_code(&value), Some("not_found"));
}
