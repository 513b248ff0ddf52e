//! Process-level tests for interrupt handling.
//!
//! These spawn the server binary with stdin held open, the way an MCP host
//! runs it, and check that SIGINT ends the process with status 0.

#![cfg(unix)]

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const EXIT_TIMEOUT: Duration = Duration::from_secs(10);

const LOG_TIMEOUT: Duration = Duration::from_secs(10);

//--------------------------------------------------------------------------------------------------
// Helper Functions
//--------------------------------------------------------------------------------------------------

/// Spawn the server with piped stdio; stderr lines are forwarded on the channel.
fn spawn_server() -> (Child, ChildStdin, Receiver<String>) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-hub-search-server"))
        .env("MCP_HUB_API_KEY", "test-key")
        .env("RUST_LOG", "info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn server binary");

    let stdin = child.stdin.take().unwrap();
    let stderr = child.stderr.take().unwrap();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    (child, stdin, rx)
}

fn wait_for_log(logs: &Receiver<String>, needle: &str) {
    let deadline = Instant::now() + LOG_TIMEOUT;
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        match logs.recv_timeout(remaining) {
            Ok(line) if line.contains(needle) => return,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
    panic!("server never logged {:?}", needle);
}

fn send_sigint(child: &Child) {
    // SAFETY: kill(2) with a valid pid of our own child process
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0, "failed to send SIGINT");
}

fn wait_for_exit(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + EXIT_TIMEOUT;
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if Instant::now() >= deadline {
            child.kill().ok();
            child.wait().ok();
            panic!("server still running {:?} after SIGINT", EXIT_TIMEOUT);
        }
        thread::sleep(Duration::from_millis(50));
    }
}

fn write_frame(stdin: &mut ChildStdin, frame: &str) {
    stdin.write_all(frame.as_bytes()).unwrap();
    stdin.write_all(b"\n").unwrap();
    stdin.flush().unwrap();
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[test]
fn test_sigint_before_initialize_exits_cleanly() {
    let (mut child, _stdin, logs) = spawn_server();

    wait_for_log(&logs, "Using MCP Hub endpoint");
    // Give the runtime a moment to install the signal handler.
    thread::sleep(Duration::from_millis(500));

    send_sigint(&child);
    let status = wait_for_exit(&mut child);
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_sigint_after_initialize_exits_cleanly() {
    let (mut child, mut stdin, logs) = spawn_server();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    write_frame(
        &mut stdin,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"shutdown-test","version":"0.0.0"}}}"#,
    );

    let mut response = String::new();
    stdout.read_line(&mut response).unwrap();
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["id"], 1);
    assert!(response["result"]["serverInfo"].is_object());

    write_frame(
        &mut stdin,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
    );
    wait_for_log(&logs, "running on stdio");

    // stdin stays open here, as it would under an MCP host.
    send_sigint(&child);
    let status = wait_for_exit(&mut child);
    assert_eq!(status.code(), Some(0));
}
