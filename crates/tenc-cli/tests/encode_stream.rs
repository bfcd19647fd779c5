use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn tenc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tenc"))
}

fn run_with_stdin(args: &[&str], stdin_bytes: &[u8]) -> Output {
    let mut child = tenc()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tenc");
    {
        let mut stdin = child.stdin.take().expect("child stdin");
        stdin.write_all(stdin_bytes).expect("write stdin");
    }
    child.wait_with_output().expect("wait tenc")
}

#[test]
fn stdin_to_stdout_converts_eol() {
    let out = run_with_stdin(&["encode", "-e", "lf"], b"a\r\nb\rc\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, b"a\nb\nc\n");
}

#[test]
fn stdin_to_stdout_reencodes() {
    let out = run_with_stdin(&["encode", "-t", "932"], "あ".as_bytes());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, [0x82, 0xA0]);
}

#[test]
fn file_to_file_with_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "あいう".as_bytes()).unwrap();

    let out = run_with_stdin(
        &[
            "encode",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-p",
        ],
        b"",
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let mut expected = vec![0xEF, 0xBB, 0xBF];
    expected.extend_from_slice("あいう".as_bytes());
    assert_eq!(fs::read(&output).unwrap(), expected);
}

#[test]
fn unknown_encoding_exits_nonzero() {
    let out = run_with_stdin(&["encode", "-f", "no-such-encoding"], b"x");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown encoding"), "stderr: {stderr}");
}
