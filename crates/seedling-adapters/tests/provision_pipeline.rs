//! End-to-end fetch + materialize against the real filesystem.
//!
//! The post-provisioning phase shells out to npm/git and is covered by the
//! service-level tests in seedling-core with a fake runner; here we only
//! drive the phases that touch the filesystem.

use std::path::PathBuf;

use seedling_adapters::{LocalFilesystem, LocalTemplateSource, SystemCommandRunner};
use seedling_core::{
    application::{ProvisionService, SkipReason, StepKind, StepStatus},
    domain::{ProjectAnswers, ProjectKind, ProjectName, SessionContext},
};

const MANIFEST: &str = r#"{
  "name": "template-project",
  "version": "0.0.1",
  "description": "A universal project template",
  "private": true
}
"#;

const RULES: &str = "# Assistant rules\n\nTell the AI which skills to use:\n- coding\n";

const README: &str = "# Seedling Project Template\n\nA universal project template.\n";

fn template_fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    std::fs::write(dir.path().join(".cursorrules"), RULES).unwrap();
    std::fs::write(dir.path().join("README.md"), README).unwrap();
    dir
}

fn session(cwd: PathBuf) -> SessionContext {
    let answers = ProjectAnswers::new(
        ProjectName::new("my-app").unwrap(),
        "A next-gen project",
        ProjectKind::Saas,
    );
    SessionContext::new(cwd, answers)
}

fn service(template_root: &std::path::Path) -> ProvisionService {
    ProvisionService::new(
        Box::new(LocalTemplateSource::new(template_root)),
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
    )
}

#[test]
fn fetch_then_materialize_produces_the_expected_tree() {
    let template = template_fixture();
    let cwd = tempfile::tempdir().unwrap();
    let ctx = session(cwd.path().to_path_buf());
    let service = service(template.path());

    service.fetch(&ctx).unwrap();
    let report = service.materialize(&ctx);
    assert!(report.is_clean());

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(ctx.target_dir().join("package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["description"], "A next-gen project");
    assert_eq!(manifest["private"], true);

    let rules = std::fs::read_to_string(ctx.target_dir().join(".cursorrules")).unwrap();
    assert_eq!(rules.matches("AUTO-ACTIVATED:").count(), 1);
    assert!(rules.contains("Activate ALL production + enterprise skills"));

    let readme = std::fs::read_to_string(ctx.target_dir().join("README.md")).unwrap();
    assert!(readme.contains("# my-app"));
    assert!(!readme.contains("Seedling Project Template"));
}

// A pre-existing, non-empty target directory is removed wholesale before
// the fetch; nothing from the earlier run survives.
#[test]
fn stale_target_directory_is_cleared_before_fetch() {
    let template = template_fixture();
    let cwd = tempfile::tempdir().unwrap();
    let ctx = session(cwd.path().to_path_buf());
    let service = service(template.path());

    std::fs::create_dir_all(ctx.target_dir()).unwrap();
    std::fs::write(ctx.target_dir().join("stray.txt"), "leftover").unwrap();

    service.fetch(&ctx).unwrap();

    assert!(!ctx.target_dir().join("stray.txt").exists());
    assert!(ctx.target_dir().join("package.json").exists());
}

#[test]
fn rerunning_materialize_is_idempotent_for_the_rules_file() {
    let template = template_fixture();
    let cwd = tempfile::tempdir().unwrap();
    let ctx = session(cwd.path().to_path_buf());
    let service = service(template.path());

    service.fetch(&ctx).unwrap();
    service.materialize(&ctx);
    let second = service.materialize(&ctx);

    assert_eq!(
        second.status_of(StepKind::Rules),
        Some(&StepStatus::Skipped(SkipReason::AlreadyApplied))
    );
    let rules = std::fs::read_to_string(ctx.target_dir().join(".cursorrules")).unwrap();
    assert_eq!(rules.matches("AUTO-ACTIVATED:").count(), 1);
}
