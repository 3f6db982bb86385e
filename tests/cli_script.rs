use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn scripted(data_dir: &TempDir, script: &str) -> Command {
    let mut cmd = Command::cargo_bin("spendwise_cli").expect("binary under test");
    cmd.env("SPENDWISE_CLI_SCRIPT", "1")
        .env("SPENDWISE_DATA_DIR", data_dir.path())
        .write_stdin(script.to_string());
    cmd
}

#[test]
fn scripted_session_covers_the_full_loop() {
    let data_dir = TempDir::new().expect("temp dir");
    let script = "budget 1000\nadd 1200 rent expense\nlist\nchart monthly\nundo\nexit\n";

    scripted(&data_dir, script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your budget: 1000.00"))
        .stdout(predicate::str::contains("You are over budget! (1200.00 > 1000.00)"))
        .stdout(predicate::str::contains("-1200.00 (rent)"))
        .stdout(predicate::str::contains("Income vs Expense (monthly)"))
        .stdout(predicate::str::contains("Removed -1200.00 (rent)."));

    assert!(data_dir.path().join("userbudget.json").exists());
}

#[test]
fn state_survives_between_sessions() {
    let data_dir = TempDir::new().expect("temp dir");

    scripted(&data_dir, "add 50 gift income\nexit\n")
        .assert()
        .success();

    scripted(&data_dir, "list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("+50.00 (gift)"));
}

#[test]
fn reset_needs_the_explicit_yes_and_acknowledges() {
    let data_dir = TempDir::new().expect("temp dir");

    scripted(&data_dir, "add 10 bus expense\nreset\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled."))
        .stdout(predicate::str::contains("-10.00 (bus)"));

    scripted(&data_dir, "reset yes\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset."))
        .stdout(predicate::str::contains("No entries recorded yet."));

    assert!(!data_dir.path().join("budgetentries.json").exists());
    assert!(!data_dir.path().join("userbudget.json").exists());
}

#[test]
fn invalid_input_warns_without_recording_anything() {
    let data_dir = TempDir::new().expect("temp dir");
    let script = "add -5 x expense\nadd 5 \"\" expense\nbudget 0\nlist\nexit\n";

    scripted(&data_dir, script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry needs a positive amount"))
        .stdout(predicate::str::contains("Budget must be greater than zero."))
        .stdout(predicate::str::contains("No entries recorded yet."));

    assert!(!data_dir.path().join("budgetentries.json").exists());
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let data_dir = TempDir::new().expect("temp dir");

    scripted(&data_dir, "lst\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Did you mean `list`?"));
}

#[test]
fn theme_toggle_is_persisted() {
    let data_dir = TempDir::new().expect("temp dir");

    scripted(&data_dir, "theme dark\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark Mode"));

    let theme_file = data_dir.path().join("theme.json");
    assert_eq!(std::fs::read_to_string(theme_file).expect("theme record"), "dark");

    scripted(&data_dir, "theme\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Light Mode"));
}
