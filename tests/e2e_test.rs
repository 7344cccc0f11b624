use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch directory holding the files a test compares
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the fixture and return its path
    fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Run the binary with the fixture as working directory
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_smart-line-diff"))
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to run smart-line-diff")
    }

    /// Run the binary and return stdout, failing the test on a non-zero exit
    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "smart-line-diff {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

#[test]
fn compare_full_mode() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "title\nhello world\nbye");
    fixture.write_file("new.txt", "title\nhello wrld\nnext");

    let stdout = fixture.run_ok(&["compare", "old.txt", "new.txt"]);
    insta::assert_snapshot!(stdout, @r"
    title
    hello w[-o-]rld
    [-bye-]
    {+next+}
    ");
}

#[test]
fn compare_inline_mode() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "title\nhello world\nbye");
    fixture.write_file("new.txt", "title\nhello wrld\nnext");

    let stdout = fixture.run_ok(&["compare", "old.txt", "new.txt", "--mode", "inline"]);
    insta::assert_snapshot!(stdout, @r"
    title
    hello wrld

    {+next+}
    ");
}

#[test]
fn compare_editor_follows_modified_lines() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "a\nb\nc");
    fixture.write_file("new.txt", "c\na\nnew");

    let stdout = fixture.run_ok(&["compare", "old.txt", "new.txt", "--editor"]);
    insta::assert_snapshot!(stdout, @r"
    c
    a
    {+new+}
    ");
}

#[test]
fn compare_with_custom_fast_path() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "abc\ndef");
    fixture.write_file("new.txt", "abd\ndef");

    let stdout = fixture.run_ok(&[
        "compare",
        "old.txt",
        "new.txt",
        "--editor",
        "--fast-path",
        "lines=1",
    ]);
    insta::assert_snapshot!(stdout, @r"
    {+abd+}
    def
    ");
}

#[test]
fn replay_snapshots() {
    let fixture = Fixture::new();
    fixture.write_file("original.txt", "alpha\nbeta\ngamma");
    fixture.write_file("v1.txt", "alpha\nbeta\ngamma");
    fixture.write_file("v2.txt", "alpha\nbetx\ngamma");

    let stdout = fixture.run_ok(&["replay", "original.txt", "v1.txt", "v2.txt"]);
    insta::assert_snapshot!(stdout, @r"
    alpha
    bet[-a-]{+x+}
    gamma
    ");
}

#[test]
fn rejects_zero_threshold() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "a");
    fixture.write_file("new.txt", "b");

    let output = fixture.run(&["compare", "old.txt", "new.txt", "--fast-path", "lines=0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Threshold 'lines' must be greater than zero"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn missing_file_fails() {
    let fixture = Fixture::new();
    fixture.write_file("old.txt", "a");

    let output = fixture.run(&["compare", "old.txt", "missing.txt"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"), "unexpected stderr: {stderr}");
}

#[test]
fn generates_completions() {
    let fixture = Fixture::new();
    let stdout = fixture.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("smart-line-diff"));
}

#[test]
fn generates_man_page() {
    let fixture = Fixture::new();
    let stdout = fixture.run_ok(&["man"]);
    assert!(stdout.contains(".TH "), "unexpected man page: {stdout}");
    assert!(stdout.contains("SUBCOMMANDS"));
    assert!(stdout.contains("compare"));
}
