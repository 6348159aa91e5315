use assert_fs::prelude::*;
use predicates::str::contains;

#[test]
fn body_size_outside_editor_range() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["--body-size", "40", "--stdout", "--no-clipboard"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn prefix_requires_export() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["--prefix", "x", "--stdout", "--no-clipboard"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn interactive_conflicts_with_page() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["-i", "--page", "1", "--no-clipboard"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn page_out_of_range_errors() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("body.txt").write_str("hello world").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .current_dir(&dir)
        .args(["--page", "99", "--stdout", "--no-clipboard", "body.txt"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("page 99 is out of range"));
}

#[test]
fn missing_input_file() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .current_dir(&dir)
        .args(["--stdout", "--no-clipboard", "nope.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("cannot read body from nope.txt"));
}
