use snapbox::cmd::Command;

fn maya_site() -> Command {
    Command::new(snapbox::cmd::cargo_bin!("maya-site"))
}

#[test]
fn check_resolves_every_entry() {
    maya_site()
        .arg("check")
        .current_dir("tests/fixtures/site")
        .assert()
        .success()
        .stdout_eq("7 sidebar entries checked, 0 broken (throw policy)\n");
}

#[test]
fn check_fails_on_missing_document() {
    maya_site()
        .arg("check")
        .current_dir("tests/fixtures/broken")
        .assert()
        .failure()
        .stdout_eq("");
}

#[test]
fn check_policy_override_warns() {
    maya_site()
        .args(["check", "--policy", "warn"])
        .current_dir("tests/fixtures/broken")
        .assert()
        .success()
        .stdout_eq("7 sidebar entries checked, 1 broken (warn policy)\n");
}

#[test]
fn check_docs_flag_overrides_project_file() {
    maya_site()
        .args(["check", "--docs", "../site/docs"])
        .current_dir("tests/fixtures/broken")
        .assert()
        .success()
        .stdout_eq("7 sidebar entries checked, 0 broken (throw policy)\n");
}

#[test]
fn check_fails_on_invalid_config() {
    maya_site()
        .args(["check", "--policy", "ignore"])
        .current_dir("tests/fixtures/invalid")
        .assert()
        .failure()
        .stdout_eq("");
}

#[test]
fn emit_fails_on_invalid_config() {
    maya_site()
        .arg("emit")
        .current_dir("tests/fixtures/invalid")
        .assert()
        .failure()
        .stdout_eq("");
}

#[test]
fn emit_destination_untouched_on_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out");
    maya_site()
        .args(["emit", "--destination"])
        .arg(&dest)
        .current_dir("tests/fixtures/invalid")
        .assert()
        .failure();
    assert!(!dest.exists());
}

#[test]
fn check_rejects_unknown_policy() {
    maya_site()
        .args(["check", "--policy", "fail"])
        .current_dir("tests/fixtures/site")
        .assert()
        .failure();
}

#[test]
fn debug_sidebars_in_order() {
    maya_site()
        .args(["debug", "sidebars"])
        .current_dir("tests/fixtures/site")
        .assert()
        .success()
        .stdout_eq(
            "mainSidebar:
  methodology\tМетодология анализа
  chat-participants\tУчастники чата
  projects\tПроекты
  vision-evolution\tЭволюция концепции
  positions-by-participant\tПозиции участников
  positions-evolution\tХронология позиций
  positions-matrix\tМатрица позиций
",
        );
}

#[test]
fn debug_docs_lists_ids() {
    maya_site()
        .args(["debug", "docs"])
        .current_dir("tests/fixtures/site")
        .assert()
        .success()
        .stdout_eq(
            "chat-participants\t02-chat-participants.md
methodology\t01-methodology.md
positions-by-participant\t05-positions-by-participant.md
positions-evolution\t06-positions-evolution.md
positions-matrix\t07-matrix.mdx
projects\t03-projects.md
vision-evolution\t04-vision-evolution.md
",
        );
}

#[test]
fn emit_json_to_stdout() {
    let assert = maya_site()
        .args(["emit", "--format", "json"])
        .current_dir("tests/fixtures/site")
        .assert()
        .success();
    let stdout = assert.get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();

    assert_eq!(value["config"]["title"], "Майя");
    assert_eq!(value["config"]["onBrokenLinks"], "throw");
    assert_eq!(
        value["config"]["themeConfig"]["navbar"]["items"][0]["sidebarId"],
        "mainSidebar"
    );
    assert_eq!(value["sidebars"]["mainSidebar"][6]["id"], "positions-matrix");
    assert_eq!(value["config"]["presets"][0][0], "classic");
}

#[test]
fn emit_writes_host_files() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out");
    maya_site()
        .args(["emit", "--format", "yaml", "--destination"])
        .arg(&dest)
        .current_dir("tests/fixtures/site")
        .assert()
        .success()
        .stdout_eq("");

    let config = std::fs::read_to_string(dest.join("docusaurus.config.yml")).unwrap();
    assert!(config.contains("sidebarPath: ./sidebars.yml"), "{config}");
    let sidebars = std::fs::read_to_string(dest.join("sidebars.yml")).unwrap();
    assert!(sidebars.starts_with("mainSidebar:\n"), "{sidebars}");
}

#[test]
fn debug_config_prints_yaml() {
    let assert = maya_site()
        .args(["debug", "config"])
        .current_dir("tests/fixtures/site")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("docsDir: docs\n"), "{stdout}");
    assert!(stdout.contains("onBrokenLinks: throw"), "{stdout}");
    assert!(stdout.contains("mainSidebar:"), "{stdout}");
}
