//! End-to-end runs of the `app-creator` binary against a throwaway apps
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const INSTALLER: &str = r#"#pragma once
#include <mooncake.h>
/* Header files locator (Don't remove) */

inline void on_install_apps()
{
    /* Install app locator (Don't remove) */
}
"#;

fn apps_dir() -> TempDir {
    let dir = tempdir().expect("Failed to create temp apps dir");
    let template_dir = dir.path().join("app_template");
    fs::create_dir(&template_dir).unwrap();
    fs::write(
        template_dir.join("app_template.cpp"),
        "#include \"app_template.h\"\nAppTemplate::AppTemplate() {}\n",
    )
    .unwrap();
    fs::write(
        template_dir.join("app_template.h"),
        "// @date <date></date>\nclass AppTemplate {};\n",
    )
    .unwrap();
    fs::write(dir.path().join("app_installer.h"), INSTALLER).unwrap();
    dir
}

fn app_creator(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("app-creator").expect("binary is built");
    cmd.arg("--apps-dir").arg(dir).arg("--no-color");
    cmd
}

#[test]
fn test_interactive_run() {
    let dir = apps_dir();

    app_creator(dir.path())
        .write_stdin("1nvalid\ntemplate\nmy_cool app\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("app generator\n"))
        .stdout(predicate::str::contains("bad name, try again").count(2))
        .stdout(predicate::str::contains("get input: my_cool app"))
        .stdout(predicate::str::contains("> new app's name: AppMyCoolApp"))
        .stdout(predicate::str::contains("> install app AppMyCoolApp into mooncake"))
        .stdout(predicate::str::ends_with("\ndone\n"));

    let header = fs::read_to_string(dir.path().join("app_my_cool_app/app_my_cool_app.h")).unwrap();
    assert!(header.contains("class AppMyCoolApp {};"));
    assert!(!header.contains("<date></date>"));

    let installer = fs::read_to_string(dir.path().join("app_installer.h")).unwrap();
    assert!(installer.contains("#include \"app_my_cool_app/app_my_cool_app.h\""));
    assert!(installer.contains("installApp(std::make_unique<AppMyCoolApp>());"));
}

#[test]
fn test_name_flag() {
    let dir = apps_dir();

    app_creator(dir.path())
        .args(["--name", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input new app's name").not());

    assert!(dir.path().join("app_foo/app_foo.cpp").is_file());
}

#[test]
fn test_existing_app_fails() {
    let dir = apps_dir();
    fs::create_dir(dir.path().join("app_foo")).unwrap();

    app_creator(dir.path())
        .args(["--name", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already exists"));

    assert_eq!(
        fs::read_to_string(dir.path().join("app_installer.h")).unwrap(),
        INSTALLER
    );
}

#[test]
fn test_missing_marker_fails() {
    let dir = apps_dir();
    fs::write(dir.path().join("app_installer.h"), "#pragma once\n").unwrap();

    app_creator(dir.path())
        .args(["--name", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("installer locator"));
}

#[test]
fn test_invalid_name_flag_fails() {
    let dir = apps_dir();

    app_creator(dir.path())
        .args(["--name", "template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid app name"));
}

#[test]
fn test_closed_stdin_fails() {
    let dir = apps_dir();

    app_creator(dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read app name"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = apps_dir();

    app_creator(dir.path())
        .args(["--name", "foo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!dir.path().join("app_foo").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("app_installer.h")).unwrap(),
        INSTALLER
    );
}

#[test]
fn test_json_output() {
    let dir = apps_dir();

    let output = app_creator(dir.path())
        .args(["--name", "foo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["name"]["pascal"], "AppFoo");
    assert_eq!(doc["name"]["snake"], "app_foo");
}

#[test]
fn test_json_output_with_prompt() {
    let dir = apps_dir();

    let output = app_creator(dir.path())
        .arg("--json")
        .write_stdin("bad1\nfoo\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["raw_name"], "foo");
    assert_eq!(doc["name"]["pascal"], "AppFoo");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input new app's name: "));
    assert!(stderr.contains("bad name, try again"));
}

#[test]
fn test_time_date_format_fails() {
    let dir = apps_dir();
    fs::write(dir.path().join("app_creator.yaml"), "date_format: \"%H:%M\"\n").unwrap();

    app_creator(dir.path())
        .args(["--name", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format"));

    assert!(!dir.path().join("app_foo").exists());
    assert_eq!(fs::read_to_string(dir.path().join("app_installer.h")).unwrap(), INSTALLER);
}

#[test]
fn test_config_file_is_discovered() {
    let dir = apps_dir();
    fs::write(dir.path().join("app_creator.yaml"), "app_prefix: Demo\n").unwrap();

    app_creator(dir.path())
        .args(["--name", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> new app's name: DemoFoo"));

    assert!(dir.path().join("demo_foo/demo_foo.h").is_file());
}
