use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn pagebar() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pagebar"));
    cmd.env_remove("PAGEBAR_CONFIG_FILE")
        .env_remove("PAGEBAR__LOGGING__LEVEL")
        .env_remove("PAGEBAR__RENDER__SANITIZE")
        .env_remove("RUST_LOG");
    cmd
}

fn markdown_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".md")
        .tempfile()
        .expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write markdown");
    file
}

#[test]
fn bar_prints_html() {
    pagebar()
        .args(["bar", "/blog", "--page-number", "2", "--total-pages", "3"])
        .assert()
        .success()
        .stdout(
            "<div class=\"m-article-pagination\"><a href=\"/blog\">« previous</a>\
             <span> | </span><a href=\"/blog\">1</a><span> | </span><span>2</span>\
             <span> | </span><a href=\"/blog/3/\">3</a><span> | </span>\
             <a href=\"/blog/3/\">next »</a></div>\n",
        );
}

#[test]
fn bar_prints_json_nodes() {
    let assert = pagebar()
        .args([
            "bar",
            "/b",
            "--page-number",
            "3",
            "--total-pages",
            "3",
            "--style",
            "x_out_of_y",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(value["class"], "m-article-pagination");
    assert_eq!(
        value["nodes"][0],
        serde_json::json!({"kind": "link", "content": "« previous", "target_url": "/b/2/"})
    );
    assert_eq!(value["nodes"][2]["content"], "page 3 out of 3");
    assert_eq!(
        value["nodes"][4],
        serde_json::json!({"kind": "text", "content": "next »"})
    );
}

#[test]
fn bar_trims_option_values() {
    pagebar()
        .args([
            "bar",
            "/b",
            "--page-number",
            "1",
            "--total-pages",
            "5",
            "--style",
            " mcss ",
        ])
        .assert()
        .success()
        .stdout(
            "<div class=\"m-article-pagination\"><span>page 1</span><span> | </span>\
             <a href=\"/b/2/\">next »</a></div>\n",
        );
}

#[test]
fn invalid_log_level_is_a_configuration_error() {
    pagebar()
        .env("PAGEBAR__LOGGING__LEVEL", "loud")
        .args(["bar", "/blog", "--page-number", "1", "--total-pages", "1"])
        .assert()
        .failure()
        .stderr(contains("failed to load configuration"));
}

#[test]
fn bar_with_empty_range_prints_nothing() {
    pagebar()
        .args(["bar", "/blog", "--page-number", "0", "--total-pages", "3"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn bar_with_malformed_number_fails() {
    pagebar()
        .args(["bar", "/blog", "--page-number", "two", "--total-pages", "3"])
        .assert()
        .failure()
        .stderr(contains("must be an integer"));
}

#[test]
fn render_prints_document() {
    let file = markdown_file(
        "# Posts\n\n```pagination /posts\n:page_number: 1\n:total_pages: 2\n:style: mcss\n```\n",
    );

    pagebar()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("<h1>Posts</h1>"))
        .stdout(contains("<span>page 1</span>"))
        .stdout(contains("href=\"/posts/2/\""));
}

#[test]
fn render_writes_output_file() {
    let file = markdown_file("```pagination /p\n:page_number: 2\n:total_pages: 2\n```\n");
    let output = NamedTempFile::new().expect("tmp output");

    pagebar()
        .arg("render")
        .arg("--output")
        .arg(output.path())
        .arg(file.path())
        .assert()
        .success()
        .stdout("");

    let html = std::fs::read_to_string(output.path()).expect("read output");
    assert!(html.contains("href=\"/p\""));
    assert!(html.contains("« previous</a>"));
    assert!(html.contains("<span>next »</span>"));
}

#[test]
fn render_reports_directive_errors() {
    let file =
        markdown_file("Intro\n\n```pagination /blog /extra\n:page_number: 1\n:total_pages: 2\n```\n");

    pagebar()
        .arg("render")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("directive `pagination` at line 3 failed"));
}

#[test]
fn render_missing_file_fails() {
    pagebar()
        .args(["render", "/nonexistent/post.md"])
        .assert()
        .failure()
        .stderr(contains("io error"));
}
