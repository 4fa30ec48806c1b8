use assert_cmd::Command;
use predicates::prelude::*;

fn notebook(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("notebook").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--no-color")
        .arg("--config")
        .arg(config_dir);
    cmd
}

#[test]
fn quit_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    notebook(temp_dir.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notebook Menu"))
        .stdout(predicate::str::contains(
            "Thank you for using your notebook today.",
        ));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    notebook(temp_dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for using your notebook today.",
        ));
}

#[test]
fn add_search_and_retag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = [
        "3", "buy milk", // note 1
        "3", "call mom", // note 2
        "4", "1", "", "shopping", // tag note 1
        "2", "mom", // search
        "4", "1", "", "groceries", // retag note 1
        "2", "shopping", // no longer matches
        "1", // show all
        "5",
    ]
    .join("\n");

    notebook(temp_dir.path())
        .write_stdin(script + "\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your note has been added.").count(2))
        .stdout(predicate::str::contains("2: \ncall mom\n"))
        .stdout(predicate::str::contains("No notes found."))
        .stdout(predicate::str::contains("1: groceries\nbuy milk\n"))
        .stdout(predicate::str::contains("1: shopping").not());
}

#[test]
fn invalid_choice_keeps_running() {
    let temp_dir = tempfile::tempdir().unwrap();
    notebook(temp_dir.path())
        .write_stdin("x\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("x is not a valid choice"));
}

#[test]
fn unknown_note_is_silent_unless_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    notebook(temp_dir.path())
        .write_stdin("4\n99\nx\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note with id").not());

    notebook(temp_dir.path())
        .arg("--report-missing")
        .write_stdin("4\n99\nx\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note with id 99"));
}

#[test]
fn config_command_persists_settings() {
    let temp_dir = tempfile::tempdir().unwrap();

    notebook(temp_dir.path())
        .args(["config", "report-missing", "true"])
        .assert()
        .success();

    notebook(temp_dir.path())
        .args(["config", "report-missing"])
        .assert()
        .success()
        .stdout("true\n");

    notebook(temp_dir.path())
        .write_stdin("4\n1\nx\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note with id 1"));
}

#[test]
fn config_command_rejects_unknown_keys() {
    let temp_dir = tempfile::tempdir().unwrap();
    notebook(temp_dir.path())
        .args(["config", "colour", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option: colour"));
}

#[test]
fn config_command_lists_and_reads_settings() {
    let temp_dir = tempfile::tempdir().unwrap();

    notebook(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout("report-missing = false\ndates = false\n");

    notebook(temp_dir.path())
        .args(["config", "dates", "on"])
        .assert()
        .success();

    notebook(temp_dir.path())
        .args(["config", "dates"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn malformed_config_falls_back_to_defaults_and_can_be_repaired() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_file = temp_dir.path().join("config.json");
    std::fs::write(&config_file, "not json").unwrap();

    notebook(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout("report-missing = false\ndates = false\n");

    notebook(temp_dir.path())
        .write_stdin("5\n")
        .assert()
        .success();

    notebook(temp_dir.path())
        .args(["config", "dates", "true"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&config_file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["show_creation_date"], true);
}

#[test]
fn dates_flag_adds_creation_date_to_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d");

    notebook(temp_dir.path())
        .arg("--dates")
        .write_stdin("3\nbuy milk\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("1:  ({})\nbuy milk\n", today)));
}
