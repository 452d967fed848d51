use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("salary_assistant_cli").unwrap();
    cmd.env("SALARY_ASSISTANT_SCRIPT", "1")
        .env("SALARY_ASSISTANT_HOME", home.path())
        .env("SALARY_ASSISTANT_API_URL", UNREACHABLE_API)
        .env_remove("RUST_LOG");
    cmd
}

fn full_form() -> String {
    [
        "set jobTitle \"Data Scientist\"",
        "set experienceLevel SE",
        "set yearsExperience 3-5",
        "set employmentType FT",
        "set remoteWork 50",
        "set companySize M",
        "set country Germany",
        "set industry Technology",
        "set education Master",
    ]
    .join("\n")
}

#[test]
fn landing_reports_unreachable_server() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(contains("Your Personal Salary Assistant"))
        .stdout(contains("Server status: unreachable"));
}

#[test]
fn submit_with_missing_fields_shows_validation_message() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("start\nset country Germany\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(contains("Please fill in all fields before submitting."));
}

#[test]
fn submit_without_server_reports_connection_problem() {
    let home = TempDir::new().unwrap();
    let input = format!("start\n{}\nsubmit\nquit\n", full_form());
    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Unable to reach the prediction server."));
}

#[test]
fn result_path_without_prediction_shows_defaults() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("/submitted")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(contains("45,000"))
        .stdout(contains("USD/YEAR"));
}

#[test]
fn result_path_reads_configured_session_file() {
    let home = TempDir::new().unwrap();
    let session = home.path().join("session.json");
    std::fs::write(
        &session,
        r#"{"salaryPrediction":"{\"predictedSalary\":87650,\"currency\":\"USD\",\"period\":\"year\",\"success\":true}"}"#,
    )
    .unwrap();
    let config_dir = home.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        serde_json::json!({ "session_file": session }).to_string(),
    )
    .unwrap();

    cli(&home)
        .arg("/submitted")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(contains("87,650"))
        .stdout(contains("USD/YEAR"));
}

#[test]
fn invalid_api_url_fails_fast() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .env("SALARY_ASSISTANT_API_URL", "localhost:8000")
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stdout(contains("api_base_url"));
}
