use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn tokenize_writes_token_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("sample.py");
    fs::copy(fixture_path("sample.py"), &source).unwrap();

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("tokenize").arg(&source);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sample.py.tokens.json"));

    let written = fs::read_to_string(dir.path().join("sample.py.tokens.json")).unwrap();
    let lines: Vec<Vec<serde_json::Value>> = serde_json::from_str(&written).unwrap();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[6][2]["content"], "Greeter");
    assert_eq!(lines[6][2]["type"], "Name.Class");
}

#[test]
fn tokenize_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path())
        .arg("tokenize")
        .arg(fixture_path("sample.json"))
        .arg("--stdout");

    let output_pred = predicate::str::contains(r#""type": "Name.Tag""#)
        .and(predicate::str::contains(r#""content": "\"name\"""#));
    cmd.assert().success().stdout(output_pred);
    assert!(!fixture_path("sample.json.tokens.json").exists());
}

#[test]
fn tokenize_with_unknown_lexer_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path())
        .arg("tokenize")
        .arg(fixture_path("sample.py"))
        .arg("--lexer")
        .arg("cobol")
        .arg("--stdout");

    cmd.assert().failure().code(1).stderr(
        predicate::str::contains("No lexer found for 'cobol'")
            .and(predicate::str::contains("python")),
    );
}

#[test]
fn tokenize_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path())
        .arg("tokenize")
        .arg("does-not-exist.py");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.py"));
}

#[test]
fn theme_prints_normalized_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("theme").arg("monokai");

    let output_pred = predicate::str::contains(r##""backgroundColor": "#272822""##)
        .and(predicate::str::contains(r#""Keyword": {"#))
        .and(predicate::str::contains("Comment.Single").not());
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn unknown_theme_lists_available() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("theme").arg("solarized");

    cmd.assert().failure().code(1).stderr(
        predicate::str::contains("Unknown theme 'solarized'")
            .and(predicate::str::contains("bw, default, monokai")),
    );
}

#[test]
fn list_themes_and_lexers() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("list-themes");
    cmd.assert().success().stdout(
        predicate::str::contains("bw")
            .and(predicate::str::contains("default"))
            .and(predicate::str::contains("monokai")),
    );

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("list-lexers");
    cmd.assert().success().stdout(
        predicate::str::contains("python")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("text"))
            .and(predicate::str::contains("*.py")),
    );
}

#[test]
fn config_file_controls_output_and_themes() {
    let dir = tempfile::tempdir().unwrap();
    let theme_dir = dir.path().join("themes");
    fs::create_dir(&theme_dir).unwrap();
    fs::write(
        theme_dir.join("paper.yaml"),
        "background_color: \"#fdf6e3\"\nstyles:\n  Keyword: \"#859900 bold\"\n",
    )
    .unwrap();

    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[output]\npretty = false\n\n[themes]\nsearch_paths = [{:?}]\n",
            theme_dir.display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("theme")
        .arg("paper");

    cmd.assert().success().stdout(predicate::str::contains(
        r##"{"backgroundColor":"#fdf6e3","styles":{"Keyword":{"color":"#859900","bold":true}}}"##,
    ));
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hilite.toml"), "[output]\npretty = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hilite");
    cmd.current_dir(dir.path()).arg("theme").arg("bw");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(r##"{"backgroundColor":"#ffffff""##));
}
