use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn markup_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write markup");
    file
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn renders_file_to_html() {
    let page = markup_file("!! Hi\nSee FrontPage\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path());

    cmd.assert().success().stdout(
        "<div><h3>Hi</h3><p>See <a href='FrontPage'>FrontPage</a></p></div>\n",
    );
}

#[test]
fn reads_stdin_when_path_is_dash() {
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg("-").write_stdin("hello world");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<div><p>hello world</p></div>"));
}

#[test]
fn tag_format_flag() {
    let page = markup_file("*bold*\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path()).arg("--format").arg("tag");

    let output_pred =
        predicate::str::contains("<document>").and(predicate::str::contains("<bold>"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("html")
            .and(predicate::str::contains("treeviz"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn unknown_format_fails() {
    let page = markup_file("text\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path()).arg("-f").arg("pdf");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}

#[test]
fn parse_error_fails() {
    let page = markup_file("a *\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error").and(predicate::str::contains("line 1")));
}

#[test]
fn config_file_selects_format() {
    let page = markup_file("text\n");
    let config = config_file("[output]\nformat = \"json\"\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path()).arg("--config").arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"document\""));
}

#[test]
fn config_file_limits_input_size() {
    let page = markup_file("more than ten bytes\n");
    let config = config_file("[parser]\nmax_input_bytes = 10\n");
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg(page.path()).arg("-c").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("over the limit of 10 bytes"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("miniwiki");
    cmd.arg("/definitely/not/here.wiki");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}
