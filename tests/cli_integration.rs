use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn arbor(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("arbor").unwrap();
    cmd.env("ARBOR_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_shows_demo_registry() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quercus robur"))
        .stdout(predicate::str::contains("Jean Dupont"))
        .stdout(predicate::str::contains("-19.2415, 47.5250"));
}

#[test]
fn test_search_filters_by_planter() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["list", "--search", "RABEMORASATA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quercus robur"))
        .stdout(predicate::str::contains("Ficus benjamina"))
        .stdout(predicate::str::contains("Mangifera indica").not());

    arbor(home.path())
        .args(["search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trees match your search"));
}

#[test]
fn test_list_json() {
    let home = tempfile::tempdir().unwrap();
    let output = arbor(home.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let trees: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let trees = trees.as_array().unwrap();
    assert_eq!(trees.len(), 3);
    assert_eq!(trees[1]["planterName"], "Jean Dupont");
    assert_eq!(trees[1]["heightCm"], 450.0);
}

#[test]
fn test_view_found_and_not_found() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 mars 2024"))
        .stdout(predicate::str::contains("/oak-tree.jpg (primary)"));

    arbor(home.path())
        .args(["view", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree not found: 42"));
}

#[test]
fn test_add_reports_every_form_error() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["add", "--height", "tall", "--health", "superbe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("speciesScientific: is required"))
        .stderr(predicate::str::contains("plantationDate: is required"))
        .stderr(predicate::str::contains("heightCm: 'tall' is not a number"))
        .stderr(predicate::str::contains("healthStatus"));
}

#[test]
fn test_delete_needs_confirmation_when_piped() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refusing to delete"));

    arbor(home.path())
        .args(["rm", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree deleted (2): Manguier"));
}

#[test]
fn test_session_keeps_one_registry() {
    let home = tempfile::tempdir().unwrap();
    let script = "\
add --id 4 --species 'Adansonia grandidieri' --date 2024-09-01 --planter \"Marie Curie\"
delete 2 --yes
view 2
edit 1 --new-id oak-1 --lat -19.5
view oak-1
search curie
exit
list
";
    arbor(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree added (4): Adansonia grandidieri"))
        .stdout(predicate::str::contains("Tree deleted (2): Manguier"))
        .stdout(predicate::str::contains("Tree not found: 2"))
        .stdout(predicate::str::contains("Id changed: 1 -> oak-1"))
        .stdout(predicate::str::contains("Quercus robur [oak-1]"))
        .stdout(predicate::str::contains("-19.5"))
        .stdout(predicate::str::contains("Marie Curie"))
        // `list` comes after `exit` and never runs.
        .stdout(predicate::str::contains("Chêne pédonculé  Quercus robur").not());
}

#[test]
fn test_session_survives_errors() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .arg("shell")
        .write_stdin("add --species Ficus\nfrobnicate\nview 3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("plantationDate: is required"))
        .stderr(predicate::str::contains("frobnicate"))
        .stdout(predicate::str::contains("Ficus benjamina"));
}

#[test]
fn test_session_survives_invalid_utf8() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .write_stdin(&b"\xff\xfe\nview 1\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quercus robur"));
}

#[test]
fn test_config_set_repairs_malformed_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), "{ nope").unwrap();

    arbor(home.path())
        .args(["config", "view", "grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view set to grid"))
        .stdout(predicate::str::contains("Replacing unreadable"));

    arbor(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("view = grid"));
}

#[test]
fn test_piped_logs_are_plain_text() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["-vv", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded config"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_config_changes_next_run() {
    let home = tempfile::tempdir().unwrap();
    arbor(home.path())
        .args(["config", "view", "grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view set to grid"));

    arbor(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("+--------"))
        .stdout(predicate::str::contains("Chêne pédonculé [1]"));

    arbor(home.path())
        .args(["config", "seed-demo", "false"])
        .assert()
        .success();

    arbor(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No trees have been added yet"));

    arbor(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-demo = false"))
        .stdout(predicate::str::contains("view = grid"));
}
