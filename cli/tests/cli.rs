use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dnscewl-bin-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_dnscewl(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dnscewl"))
        .args(args)
        .arg("--no-banner")
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to execute dnscewl");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prepends_targets_read_from_stdin() {
    let words = scratch_file("prepend.txt", "dev\n");
    let output = run_dnscewl(&["-p", words.to_str().unwrap(), "--level", "1"], "example.com\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["devexample.com", "dev.example.com"]);
    std::fs::remove_file(words).unwrap();
}

#[test]
fn append_with_subdomain_filter() {
    let words = scratch_file("append.txt", "bar\n");
    let output = run_dnscewl(&["-a", words.to_str().unwrap(), "-t", "example.com", "-s"], "");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["example.bar.com"]);
    std::fs::remove_file(words).unwrap();
}

#[test]
fn missing_word_lists_fail_before_generation() {
    let output = run_dnscewl(&["-t", "example.com"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("append or prepend"), "{stderr}");
}

#[test]
fn invalid_range_fails() {
    let words = scratch_file("range-set.txt", "dev\n");
    let output = run_dnscewl(&["--sL", words.to_str().unwrap(), "-t", "dev.1.com", "--range", "+abc"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("+abc is not a valid range"));
    std::fs::remove_file(words).unwrap();
}

#[test]
fn unreadable_list_fails() {
    let output = run_dnscewl(&["-a", "/nonexistent/dnscewl/words.txt", "-t", "a.com"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn range_and_no_repeats() {
    let words = scratch_file("norepeat-set.txt", "www\n");
    let output = run_dnscewl(
        &["--sL", words.to_str().unwrap(), "-t", "1.2.com", "--range", "+2", "--no-repeats"],
        "",
    );

    assert!(output.status.success());
    // Label "1" walks 1..3 and label "2" walks 2..4; "2.2.com" repeats a label and is hidden.
    assert_eq!(stdout_lines(&output), vec!["1.2.com", "1.2.com", "1.3.com"]);
    std::fs::remove_file(words).unwrap();
}

#[test]
fn output_is_deterministic() {
    let words = scratch_file("det-append.txt", "a\nb\nc\n");
    let path = words.to_str().unwrap().to_string();
    let first = run_dnscewl(&["-a", &path, "--level", "2"], "w1.example.com\nmail.example.com\n");
    let second = run_dnscewl(&["-a", &path, "--level", "2"], "w1.example.com\nmail.example.com\n");

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
    std::fs::remove_file(words).unwrap();
}
