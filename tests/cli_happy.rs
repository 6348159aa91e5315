mod common;
use assert_fs::prelude::*;
use common::numbered_lines;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn stdout_prints_cover_and_pages() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("body.txt").write_str("hello\n---\nworld").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .current_dir(&dir)
        .args(["--stdout", "--no-clipboard", "--title", "Hi", "body.txt"])
        .assert()
        .success()
        .stdout(contains("<card-deck version=\"1\" total-pages=\"2\""))
        .stdout(contains("<cover file=\"rednote-card-1.png\" title-size=\"32\" title=\"Hi\""))
        .stdout(contains("<page index=\"2\" of=\"2\" file=\"rednote-card-3.png\""))
        .stdout(contains("---").not())
        .stderr(contains("OK 2 pages + cover"));
}

#[test]
fn trailing_break_marker_adds_no_empty_card() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("body.txt")
        .write_str("intro\n---\nsecond\n---\n")
        .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .current_dir(&dir)
        .args(["--stdout", "--no-clipboard", "body.txt"])
        .assert()
        .success()
        .stdout(contains("total-pages=\"2\""))
        .stdout(contains("<page index=\"3\"").not())
        .stderr(contains("OK 2 pages + cover"));
}

#[test]
fn clipboard_failure_only_warns() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["--stdout"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(contains("<card-deck"))
        .stderr(contains("OK 1 pages + cover"));
}

#[test]
fn reads_body_from_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["--stdout", "--no-clipboard", "-f", "24"])
        .write_stdin(numbered_lines(30))
        .assert()
        .success()
        .stdout(contains("total-pages=\"3\""))
        .stdout(contains("body-font-size=\"24\""));
}

#[test]
fn single_page_selection() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("body.txt").write_str("one\n---\ntwo\n---\nthree").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .current_dir(&dir)
        .args(["--stdout", "--no-clipboard", "--page", "2", "body.txt"])
        .assert()
        .success()
        .stdout(contains("<page index=\"2\" of=\"3\""))
        .stdout(contains("two"))
        .stdout(contains("one").not())
        .stdout(contains("<more remaining=\"1\"/>"))
        .stdout(contains("<card-deck").not());
}

#[test]
fn stats_go_to_stderr() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["--no-clipboard", "--stats"])
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(contains("1 pages, 33 chars/line, 18 lines/page"))
        .stderr(contains("page 1: 2/18 lines, 2 raw"));
}

#[test]
fn escape_xml_rewrites_body() {
    assert_cmd::cargo::cargo_bin_cmd!("card-pager")
        .args(["--stdout", "--no-clipboard", "--escape-xml"])
        .write_stdin("if a < b && c")
        .assert()
        .success()
        .stdout(contains("if a &lt; b &amp;&amp; c"));
}
