use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_user-registry"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_config(dir: &Path, body: &str) -> String {
    let config_path = dir.join("registry.toml");
    fs::write(&config_path, body).unwrap();
    config_path.to_str().unwrap().to_string()
}

#[test]
fn test_list_prints_header_then_users_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("users.json");
    fs::write(
        &seed_path,
        r#"[{"name": "Ann", "age": 30}, {"name": "Bo", "age": 25, "email": "bo@example.com"}]"#,
    )
    .unwrap();
    let config = write_config(
        temp_dir.path(),
        &format!(
            "[registry]\norganization = \"Acme\"\nseed_file = \"{}\"\n",
            seed_path.display()
        ),
    );

    let output = run_cli(&["--config", &config, "list"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Acme (2 users)\nAnn is 30 years old\nBo is 25 years old <bo@example.com>\n"
    );
}

#[test]
fn test_lookup_returns_first_user_for_any_id() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("users.csv");
    fs::write(&seed_path, "name,age\nAnn,30\nBo,25\n").unwrap();

    let output = run_cli(&[
        "--organization",
        "Acme",
        "--seed",
        seed_path.to_str().unwrap(),
        "lookup",
        "--id",
        "999",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Ann is 30 years old\n");
}

#[test]
fn test_lookup_on_empty_registry_exits_1() {
    let output = run_cli(&["--organization", "Acme", "lookup", "--id", "1"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "not found\n");
}

#[test]
fn test_bad_seed_extension_in_config_exits_2() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "[registry]\norganization = \"Acme\"\nseed_file = \"users.xml\"\n",
    );

    let output = run_cli(&["--config", &config, "list"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("registry.seed_file"));
}

#[test]
fn test_missing_config_file_exits_3() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let output = run_cli(&["--config", missing.to_str().unwrap(), "list"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_flag_beats_configured_level() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "[registry]\norganization = \"Acme\"\n[logging]\nlevel = \"warn\"\n",
    );

    let quiet = run_cli(&["--config", &config, "lookup", "--id", "1"]);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("Resolved settings"));

    let verbose = run_cli(&["--config", &config, "-v", "lookup", "--id", "1"]);
    assert_eq!(verbose.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("Resolved settings"));
}
