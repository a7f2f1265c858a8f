use std::path::Path;
use std::sync::Arc;

use tfarchive::{
    ArchiveError, Classifier, ClassifierConfig, discover_terraform_files, generate_removal_scripts,
};

fn write_tf(root: &Path, directory: &str, file: &str, content: &str) {
    let dir = root.join(directory);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file), content).unwrap();
}

async fn run(root: &Path, output: &Path) -> Result<Vec<String>, ArchiveError> {
    let config = ClassifierConfig::default();
    let files = discover_terraform_files(root, &config).await?;
    let summaries =
        generate_removal_scripts(root, output, files, Arc::new(Classifier::new(config))).await?;
    Ok(summaries.into_iter().map(|s| s.script).collect())
}

fn read_script(output: &Path, name: &str) -> String {
    std::fs::read_to_string(output.join(name)).unwrap()
}

#[tokio::test]
async fn test_archived_resource_script() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "platform",
        "repos.tf",
        r#"
resource "github_repository" "foo" {
  archived = true
}
"#,
    );

    let scripts = run(root.path(), output.path()).await.unwrap();

    assert_eq!(scripts.len(), 1);
    assert_eq!(
        read_script(output.path(), "platform-repos.sh"),
        "terragrunt state rm github_repository.foo\n"
    );
}

#[tokio::test]
async fn test_archived_module_script() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "platform",
        "modules.tf",
        r#"
module "bar" {
  source   = "git::https://github.com/org/terraform-module-github-repository//x"
  archived = true
}
"#,
    );

    run(root.path(), output.path()).await.unwrap();

    assert_eq!(
        read_script(output.path(), "platform-modules.sh"),
        "terragrunt state rm module.bar\n"
    );
}

#[tokio::test]
async fn test_other_module_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "platform",
        "modules.tf",
        r#"
# uses terraform-module-github-repository elsewhere
module "bar" {
  source   = "other-module"
  archived = true
}
"#,
    );

    let scripts = run(root.path(), output.path()).await.unwrap();

    assert!(scripts.is_empty());
    assert!(!output.path().join("platform-modules.sh").exists());
}

#[tokio::test]
async fn test_no_qualifying_blocks_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "platform",
        "repos.tf",
        r#"
resource "github_repository" "active" {
  archived = false
}

resource "github_repository" "unset" {
  name = "unset"
}
"#,
    );

    let scripts = run(root.path(), output.path()).await.unwrap();

    assert!(scripts.is_empty());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_mixed_file_keeps_block_order() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "team",
        "main.tf",
        r#"
module "legacy" {
  source   = "terraform-module-github-repository"
  archived = true
}

resource "github_repository" "old" {
  archived = true
}

resource "github_repository" "old" {
  archived = true
}
"#,
    );

    run(root.path(), output.path()).await.unwrap();

    assert_eq!(
        read_script(output.path(), "team-main.sh"),
        "terragrunt state rm module.legacy\n\
         terragrunt state rm github_repository.old\n\
         terragrunt state rm github_repository.old\n"
    );
}

#[tokio::test]
async fn test_config_tf_is_ignored() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "team",
        "config.tf",
        r#"
resource "github_repository" "foo" {
  archived = true
}
"#,
    );

    let scripts = run(root.path(), output.path()).await.unwrap();

    assert!(scripts.is_empty());
}

#[tokio::test]
async fn test_creates_missing_output_dir() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let nested = output.path().join("scripts");
    write_tf(
        root.path(),
        "team",
        "main.tf",
        "resource \"github_repository\" \"foo\" {\n  archived = true\n}\n",
    );

    run(root.path(), &nested).await.unwrap();

    assert!(nested.join("team-main.sh").exists());
}

#[tokio::test]
async fn test_evaluation_failure_halts_run_in_file_order() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "a-team",
        "main.tf",
        "resource \"github_repository\" \"first\" {\n  archived = true\n}\n",
    );
    write_tf(
        root.path(),
        "b-team",
        "main.tf",
        r#"
resource "github_repository" "ok" {
  archived = true
}

resource "github_repository" "broken" {
  archived = var.archived
}
"#,
    );
    write_tf(
        root.path(),
        "c-team",
        "main.tf",
        "resource \"github_repository\" \"last\" {\n  archived = true\n}\n",
    );

    let result = run(root.path(), output.path()).await;

    match result {
        Err(ArchiveError::Evaluation {
            path, attribute, ..
        }) => {
            assert!(path.ends_with("b-team/main.tf"));
            assert_eq!(attribute, "archived");
        }
        other => panic!("expected Evaluation error, got {:?}", other),
    }
    assert!(output.path().join("a-team-main.sh").exists());
    assert!(!output.path().join("b-team-main.sh").exists());
    assert!(!output.path().join("c-team-main.sh").exists());
}

#[tokio::test]
async fn test_parse_failure_is_reported() {
    let root = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_tf(
        root.path(),
        "team",
        "main.tf",
        "resource \"github_repository\" \"foo\" {\n",
    );

    let result = run(root.path(), output.path()).await;

    assert!(matches!(result, Err(ArchiveError::Parse { .. })));
}
