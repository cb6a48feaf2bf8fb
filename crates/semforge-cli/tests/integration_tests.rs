//! End-to-end CLI tests.
//!
//! The happy-path tests stand in a real tool's shoes with a tiny shell
//! script that prints a fixed descriptor document, exercising the whole
//! pipeline from `sh -c` invocation to files on disk.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("semforge"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version_matches_package() {
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_help_lists_flags() {
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["generate", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--launcher"))
        .stdout(predicate::str::contains("--compat"))
        .stdout(predicate::str::contains("--redirect-x"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("semforge"));
}

#[test]
fn test_generate_without_tools_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.current_dir(dir.path());
    cmd.arg("generate");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No tools"));
}

#[test]
fn test_init_writes_then_guards_then_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("semforge.toml");
    let path_arg = config_path.to_str().unwrap();

    // First run writes the default config.
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["init", "--path", path_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[batch]"));
    assert!(written.contains("output_dir"));

    // Second run without --force refuses to overwrite.
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["init", "--path", path_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // --force overwrites.
    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["init", "--path", path_arg, "--force"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
}

// ── Happy path against a scripted tool ────────────────────────────────────────

#[cfg(unix)]
const DESCRIBE_SCRIPT: &str = r#"#!/bin/sh
cat <<'EOF'
<?xml version="1.0" encoding="utf-8"?>
<executable>
  <category>Filtering</category>
  <title>Gradient Filter</title>
  <description>Computes the gradient magnitude of a volume.</description>
  <version>1.0</version>
  <parameters>
    <label>IO</label>
    <file>
      <name>inputVolume</name>
      <longflag>--inputVolume</longflag>
      <channel>input</channel>
      <description>Input volume</description>
    </file>
    <file>
      <name>outputVolume</name>
      <longflag>--outputVolume</longflag>
      <channel>output</channel>
      <description>Output gradient volume</description>
    </file>
  </parameters>
</executable>
EOF
"#;

/// Write the fixture script into `dir` and return its path as a string.
#[cfg(unix)]
fn install_script(dir: &std::path::Path) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("describe.sh");
    std::fs::write(&script, DESCRIBE_SCRIPT).unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script.to_str().unwrap().to_string()
}

#[cfg(unix)]
#[test]
fn test_generate_materialises_the_package_tree() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path());
    let out_dir = dir.path().join("generated");

    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args([
        "generate",
        "GradientFilter",
        "--launcher",
        &script,
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "Generating Definition for module GradientFilter",
    ));

    let category_dir = out_dir.join("Filtering");
    assert!(category_dir.join("__init__.py").exists());
    assert!(category_dir.join("filtering.py").exists());
    assert!(out_dir.join("__init__.py").exists());

    let module = std::fs::read_to_string(category_dir.join("filtering.py")).unwrap();
    assert!(module.contains("class GradientFilter(SEMLikeCommandLine):"));
    assert!(module.contains("outputVolume = traits.Either"));
}

#[cfg(unix)]
#[test]
fn test_show_renders_module_text() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path());

    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args(["show", "GradientFilter", "--launcher", &script]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "class GradientFilter(SEMLikeCommandLine):",
        ))
        .stdout(predicate::str::contains(
            "class GradientFilterInputSpec(CommandLineInputSpec):",
        ));
}

#[cfg(unix)]
#[test]
fn test_show_emits_json_spec() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path());

    let mut cmd = Command::cargo_bin("semforge").unwrap();
    cmd.args([
        "show",
        "GradientFilter",
        "--launcher",
        &script,
        "--output-format",
        "json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"GradientFilter\""))
        .stdout(predicate::str::contains("\"category\": \"Filtering\""));
}
