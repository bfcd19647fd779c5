use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tenc"))
        .args(args)
        .output()
        .expect("spawn tenc")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn getinfo_by_name_prints_csv_row() {
    let out = run(&["getinfo", "-n", "shift_jis", "-n", "utf-8"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "Name,CodePage,Found,DisplayName,Preamble(hex)");
    assert_eq!(lines[1], "shift_jis,932,true,Shift_JIS,");
    assert_eq!(lines[2], "utf-8,65001,true,UTF-8,efbbbf");
}

#[test]
fn getinfo_by_code_page_range_skips_unknown_without_show_fault() {
    let out = run(&["getinfo", "-c", "930-935"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Shift_JIS,932,true,Shift_JIS,");
}

#[test]
fn getinfo_show_fault_lists_unresolved_code_pages() {
    let out = run(&["getinfo", "-c", "930-932", "-s"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], ",930,false,,");
    assert_eq!(lines[2], ",931,false,,");
    assert_eq!(lines[3], "Shift_JIS,932,true,Shift_JIS,");
}

#[test]
fn getinfo_skips_inverted_range() {
    let out = run(&["getinfo", "-c", "100-0", "-s"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out).len(), 1);
}
