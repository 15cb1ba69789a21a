use std::path::Path;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_securevault").to_string()
}

fn run(store: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--store")
        .arg(store)
        .args(args)
        .output()
        .expect("run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn register_login_and_admin_approval_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    let output = run(
        &store,
        &[
            "register",
            "alice@example.com",
            "--password",
            "longenough",
            "--confirm",
            "longenough",
            "--plan",
            "pro",
        ],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("Account created!"));
    assert!(stdout(&output).contains("Pro"));

    // Still pending: login succeeds but routes to the approval queue.
    let output = run(&store, &["login", "alice@example.com", "--password", "pw"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("account pending"));

    // Admin operations refuse to run without an admin session.
    let output = run(&store, &["admin", "list"]);
    assert!(!output.status.success(), "unexpected success");
    assert!(stderr(&output).contains("admin session required"));

    let output = run(
        &store,
        &["admin", "login", "admin@securevault.com", "--password", "admin123"],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let output = run(&store, &["admin", "approve", "alice@example.com"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("now active"));

    let output = run(&store, &["login", "alice@example.com", "--password", "pw"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("Welcome back"));

    let output = run(&store, &["whoami"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("alice@example.com"));
}

#[test]
fn register_rejects_short_passwords() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    let output = run(
        &store,
        &[
            "register",
            "bob@example.com",
            "--password",
            "short",
            "--confirm",
            "short",
        ],
    );
    assert!(!output.status.success(), "unexpected success");
    assert!(stderr(&output).contains("too short"));
}

#[test]
fn rejected_accounts_are_refused_at_login() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    run(
        &store,
        &[
            "register",
            "carol@example.com",
            "--password",
            "longenough",
            "--confirm",
            "longenough",
        ],
    );
    run(
        &store,
        &["admin", "login", "admin@securevault.com", "--password", "admin123"],
    );
    let output = run(&store, &["admin", "reject", "carol@example.com"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let output = run(&store, &["login", "carol@example.com", "--password", "pw"]);
    assert!(!output.status.success(), "unexpected success");
    assert!(stderr(&output).contains("rejected"));
}

#[test]
fn vault_list_groups_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    // Duplicate titles collapse to a group entry.
    let output = run(&store, &["vault", "list", "--json"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(entries.len(), 7);
    let groups: Vec<_> = entries.iter().filter(|e| e["kind"] == "group").collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["title"], "Google");
    assert_eq!(groups[0]["items"].as_array().unwrap().len(), 2);

    // Expanding the group shows the members individually.
    let output = run(&store, &["vault", "list", "--json", "--expand", "Google"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(entries.len(), 8);
    assert!(entries.iter().all(|e| e["kind"] == "item"));

    // Category tab narrows to the exact kind.
    let output = run(&store, &["vault", "list", "--json", "--category", "card"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Chase Sapphire");

    // Last-used sort puts "Just now" first.
    let output = run(&store, &["vault", "list", "--json", "--sort", "last-used"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(entries[0]["title"], "GitHub");
}

#[test]
fn vault_show_reports_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    let output = run(&store, &["vault", "show", "999"]);
    assert!(!output.status.success(), "unexpected success");
    assert!(stderr(&output).contains("999"));
}

#[test]
fn admin_export_prints_the_csv_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    run(
        &store,
        &[
            "register",
            "dave@example.com",
            "--password",
            "longenough",
            "--confirm",
            "longenough",
        ],
    );
    run(
        &store,
        &["admin", "login", "admin@securevault.com", "--password", "admin123"],
    );
    let output = run(&store, &["admin", "export"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let csv = stdout(&output);
    assert!(csv.starts_with("Email,Plan,Status,LastLogin\n"));
    assert!(csv.contains("dave@example.com,free-trial,pending,"));
}

#[test]
fn settings_round_trip_through_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");
    let config = dir.path().join("config.toml");
    let config_arg = config.to_str().unwrap();

    let output = run(
        &store,
        &["--config", config_arg, "settings", "set", "two-factor", "off"],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("Changes saved"));

    let output = run(&store, &["--config", config_arg, "settings", "show", "--json"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["two_factor"], false);
    assert_eq!(parsed["session_timeout_minutes"], 30);
}

#[test]
fn security_overview_reports_weak_passwords() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("local_store.json");

    let output = run(&store, &["security"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Overall score:       98%"));
    assert!(text.contains("Netflix"));
}
