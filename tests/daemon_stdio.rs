use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_daemon() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_enrolld");
    let mut child = Command::new(exe)
        .env_remove("ENROLLD_IELTS_SPREADSHEET_ID")
        .env_remove("ENROLLD_APTIS_SPREADSHEET_ID")
        .env_remove("ENROLLD_SERVICE_ACCOUNT_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn enrolld");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn send_line(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>, line: &str) -> serde_json::Value {
    writeln!(stdin, "{}", line).expect("write line");
    stdin.flush().expect("flush line");

    let mut reply = String::new();
    reader.read_line(&mut reply).expect("read response line");
    assert!(!reply.trim().is_empty(), "empty response for {line}");
    serde_json::from_str(reply.trim()).expect("response line is valid json")
}

#[test]
fn malformed_lines_get_a_well_formed_bad_json_reply() {
    let (mut child, mut stdin, mut reader) = spawn_daemon();

    // Each reply must itself parse, whatever the parse error mentions:
    // truncated strings, stray quotes, backslashes.
    for line in [
        "{\"id\": \"1\", \"method\": \"he",
        "{\"id\": 1, \"method\": \"health\"}",
        "not json \\ \" at all",
    ] {
        let reply = send_line(&mut stdin, &mut reader, line);
        assert_eq!(reply.get("ok").and_then(|v| v.as_bool()), Some(false));
        assert_eq!(
            reply.pointer("/error/code").and_then(|v| v.as_str()),
            Some("bad_json"),
            "line: {line}"
        );
    }

    // The loop survives bad input; a valid request still answers.
    let reply = send_line(
        &mut stdin,
        &mut reader,
        &json!({ "id": "2", "method": "health", "params": {} }).to_string(),
    );
    assert_eq!(reply.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        reply.pointer("/result/connected").and_then(|v| v.as_bool()),
        Some(false)
    );

    drop(stdin);
    let _ = child.wait();
}
