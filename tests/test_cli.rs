use assert_cmd::Command;
use predicates::prelude::*;
use rstest::*;
use std::fs;
use tempfile::TempDir;
use urlvault::config::{ENV_ACCEPT_INVALID_CERTS, ENV_DATA_DIR, ENV_FETCH_TIMEOUT};

#[fixture]
fn vault() -> TempDir {
    TempDir::new().unwrap()
}

/// `urlvault` against an isolated data directory, without colors or user settings
fn urlvault(vault: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("urlvault").unwrap();
    cmd.env_remove(ENV_DATA_DIR)
        .env_remove(ENV_FETCH_TIMEOUT)
        .env_remove(ENV_ACCEPT_INVALID_CERTS)
        .env("HOME", vault.path())
        .arg("--no-color")
        .arg("--data-dir")
        .arg(vault.path().join("data"));
    cmd
}

fn add(vault: &TempDir, url: &str, extra: &[&str]) -> String {
    let output = urlvault(vault)
        .args(["add", url, "--no-web"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn list_json(vault: &TempDir, extra: &[&str]) -> serde_json::Value {
    let output = urlvault(vault)
        .args(["list", "--json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "list failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[rstest]
fn given_no_command_when_run_then_succeeds(vault: TempDir) {
    urlvault(&vault).assert().success();
}

#[rstest]
fn given_new_url_when_add_then_listed_with_all_fields(vault: TempDir) {
    let id = add(
        &vault,
        "https://www.rust-lang.org",
        &["--title", "Rust", "-c", "Dev", "-t", "lang, web", "--comment", "home"],
    );

    let entries = list_json(&vault, &[]);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], id.as_str());
    assert_eq!(entries[0]["url"], "https://www.rust-lang.org");
    assert_eq!(entries[0]["title"], "Rust");
    assert_eq!(entries[0]["category"], "Dev");
    assert_eq!(entries[0]["tags"], serde_json::json!(["lang", "web"]));
    assert_eq!(entries[0]["comment"], "home");
    assert_eq!(entries[0]["dateSaved"], entries[0]["lastModified"]);

    let stored = fs::read_to_string(vault.path().join("data").join("urls.json")).unwrap();
    assert!(stored.contains("\"dateSaved\""));
}

#[rstest]
fn given_no_category_when_add_then_first_configured_category(vault: TempDir) {
    add(&vault, "https://example.com", &[]);

    let entries = list_json(&vault, &[]);
    assert_eq!(entries[0]["category"], "Work");
}

#[rstest]
fn given_same_url_differing_in_case_when_add_then_duplicate_exit_code(vault: TempDir) {
    add(&vault, "https://Example.com/Page", &[]);

    urlvault(&vault)
        .args(["add", "https://example.com/page", "--no-web"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(list_json(&vault, &[]).as_array().unwrap().len(), 1);
}

#[rstest]
fn given_blank_url_when_add_then_usage_error(vault: TempDir) {
    urlvault(&vault)
        .args(["add", "   ", "--no-web"])
        .assert()
        .code(64);
}

#[rstest]
fn given_id_prefix_when_edit_then_only_given_fields_change(vault: TempDir) {
    let id = add(&vault, "https://example.com", &["--title", "Old", "-t", "a,b"]);

    urlvault(&vault)
        .args(["edit", &id[..8], "--title", "New"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated: New"));

    let entries = list_json(&vault, &[]);
    assert_eq!(entries[0]["id"], id.as_str());
    assert_eq!(entries[0]["title"], "New");
    assert_eq!(entries[0]["tags"], serde_json::json!(["a", "b"]));
}

#[rstest]
fn given_url_of_other_entry_when_edit_then_rejected(vault: TempDir) {
    add(&vault, "https://a.example", &[]);
    let id = add(&vault, "https://b.example", &[]);

    urlvault(&vault)
        .args(["edit", &id, "--url", "HTTPS://A.EXAMPLE"])
        .assert()
        .code(65);

    // same URL as itself is fine
    urlvault(&vault)
        .args(["edit", &id, "--url", "https://B.example"])
        .assert()
        .success();
}

#[rstest]
fn given_short_or_unknown_selector_when_show_then_usage_error(vault: TempDir) {
    add(&vault, "https://example.com", &[]);

    urlvault(&vault).args(["show", "ab"]).assert().code(64);
    urlvault(&vault)
        .args(["show", "ffffffff-ffff-ffff-ffff-ffffffffffff"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn given_yes_flag_when_delete_then_removed(vault: TempDir) {
    let keep = add(&vault, "https://keep.example", &[]);
    let gone = add(&vault, "https://gone.example", &[]);

    urlvault(&vault).args(["delete", &gone, "-y"]).assert().success();

    urlvault(&vault)
        .args(["list", "--np"])
        .assert()
        .success()
        .stdout(predicate::str::contains(keep.as_str()))
        .stdout(predicate::str::contains(gone.as_str()).not());
}

#[rstest]
fn given_declined_confirmation_when_delete_then_kept(vault: TempDir) {
    let id = add(&vault, "https://example.com", &[]);

    urlvault(&vault)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Deletion cancelled"));

    assert_eq!(list_json(&vault, &[]).as_array().unwrap().len(), 1);
}

#[rstest]
fn given_filters_when_list_then_only_matching_entries(vault: TempDir) {
    add(&vault, "https://a.example", &["--title", "Alpha", "-c", "Dev", "-t", "rust,web"]);
    add(&vault, "https://b.example", &["--title", "Beta", "-c", "Dev", "-t", "web"]);
    add(&vault, "https://c.example", &["--title", "Gamma", "-c", "Personal", "-t", "rust"]);

    let titles = |value: serde_json::Value| -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(titles(list_json(&vault, &["-c", "Dev", "-s", "title"])), ["Alpha", "Beta"]);
    assert_eq!(titles(list_json(&vault, &["-t", "rust", "-s", "title"])), ["Alpha", "Gamma"]);
    assert_eq!(titles(list_json(&vault, &["gam"])), ["Gamma"]);
    assert_eq!(
        titles(list_json(&vault, &["-c", "All", "-s", "title", "--desc"])),
        ["Gamma", "Beta", "Alpha"]
    );
    assert_eq!(list_json(&vault, &["-l", "1"]).as_array().unwrap().len(), 1);
}

#[rstest]
fn given_unknown_sort_column_when_list_then_usage_error(vault: TempDir) {
    urlvault(&vault).args(["list", "-s", "stars"]).assert().code(64);
}

#[rstest]
fn given_header_clicks_when_sort_then_direction_toggles_and_persists(vault: TempDir) {
    add(&vault, "https://a.example", &["--title", "Alpha"]);
    add(&vault, "https://b.example", &["--title", "Beta"]);

    urlvault(&vault)
        .args(["sort", "title"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sorting by Title, ascending"));
    urlvault(&vault)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Title ▲"));

    urlvault(&vault)
        .args(["sort", "Title"])
        .assert()
        .success()
        .stderr(predicate::str::contains("descending"));
    let output = urlvault(&vault).args(["list", "--np"]).output().unwrap();
    let ids: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let entries = list_json(&vault, &["-s", "title", "--desc"]);
    assert_eq!(ids[0], entries[0]["id"].as_str().unwrap());

    let state = fs::read_to_string(vault.path().join("data").join("view-state.json")).unwrap();
    assert!(state.contains("Descending"));
}

#[rstest]
fn given_layout_when_set_columns_then_saved_and_shown(vault: TempDir) {
    urlvault(&vault)
        .args(["columns", "--set", "URL:30,Title"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1. URL (30)"))
        .stderr(predicate::str::contains("2. Title (40, default)"));

    assert!(vault.path().join("data").join("columns.json").exists());

    urlvault(&vault)
        .args(["columns", "--reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1. Title"));
}

#[rstest]
fn given_unknown_column_when_set_columns_then_usage_error(vault: TempDir) {
    urlvault(&vault)
        .args(["columns", "--set", "Stars"])
        .assert()
        .code(64);
}

#[rstest]
fn given_first_run_when_list_categories_then_default_vocabulary(vault: TempDir) {
    urlvault(&vault)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout("Work\nPersonal\nHacking\nDev\nInfra\n");

    assert!(vault.path().join("data").join("config.json").exists());
}

#[rstest]
fn given_vocabulary_changes_when_list_then_reflected(vault: TempDir) {
    urlvault(&vault).args(["tag", "add", "Rust"]).assert().success();
    urlvault(&vault).args(["tag", "remove", "Docker"]).assert().success();

    urlvault(&vault)
        .args(["tag", "list"])
        .assert()
        .success()
        .stdout("C#\nReact\nSecurity\nNeo4j\nRust\n");

    urlvault(&vault).args(["tag", "add", "Rust"]).assert().code(64);
    urlvault(&vault)
        .args(["category", "remove", "Music"])
        .assert()
        .code(64);
}

#[rstest]
#[case("bash", "urlvault")]
#[case("zsh", "#compdef urlvault")]
#[case("fish", "complete -c urlvault")]
fn given_shell_when_completion_then_script_on_stdout(
    vault: TempDir,
    #[case] shell: &str,
    #[case] expected: &str,
) {
    urlvault(&vault)
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[rstest]
fn given_generate_config_when_run_then_prints_settings_toml(vault: TempDir) {
    urlvault(&vault)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data_dir"));
}

#[rstest]
fn given_missing_settings_file_when_run_then_usage_error(vault: TempDir) {
    urlvault(&vault)
        .args(["-c", "/nonexistent/settings.toml", "list"])
        .assert()
        .code(64);
}

#[rstest]
#[case("Title:inf")]
#[case("Title:1e30")]
#[case("Title:0")]
fn given_unusable_width_when_set_columns_then_rejected_and_nothing_saved(
    vault: TempDir,
    #[case] layout: &str,
) {
    urlvault(&vault)
        .args(["columns", "--set", layout])
        .assert()
        .code(64);

    assert!(!vault.path().join("data").join("columns.json").exists());
}

#[rstest]
fn given_hand_edited_huge_width_when_list_then_table_still_drawn(vault: TempDir) {
    add(&vault, "https://example.com", &["--title", "Example"]);
    fs::write(
        vault.path().join("data").join("columns.json"),
        r#"{"columns":[{"key":"Title","order":0,"width":1e30}]}"#,
    )
    .unwrap();

    urlvault(&vault)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Example"));
}

#[rstest]
fn given_same_entry_named_twice_when_delete_then_deleted_once(vault: TempDir) {
    let id = add(&vault, "https://example.com", &[]);

    urlvault(&vault)
        .args(["delete", &id[..8], &id, "-y"])
        .assert()
        .success();

    assert!(list_json(&vault, &[]).as_array().unwrap().is_empty());
}

#[rstest]
fn given_no_web_when_add_without_title_then_no_fetch_warning(vault: TempDir) {
    urlvault(&vault)
        .args(["add", "https://example.com", "--no-web"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No title found").not());
}

#[rstest]
fn given_unreachable_page_when_add_then_fetch_warning(vault: TempDir) {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    urlvault(&vault)
        .args(["add", &format!("http://127.0.0.1:{}/", port)])
        .assert()
        .success()
        .stderr(predicate::str::contains("No title found"));
}
