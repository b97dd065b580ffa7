//! Git-backed template source.
//!
//! Fetches the fixed remote template with a shallow `git clone` and strips
//! the embedded `.git` directory afterwards, leaving a plain file tree.
//! The provisioned project gets a fresh history from the post-provisioning
//! phase, never the template's.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use seedling_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::SeedlingResult,
};

/// The remote template repository. This is the only template the tool
/// knows; there is deliberately no way to configure another.
pub const TEMPLATE_REPOSITORY: &str = "https://github.com/cosecruz/seedling-template.git";

/// Fetches templates by shallow-cloning a git repository.
#[derive(Debug, Clone)]
pub struct GitTemplateSource {
    repository: String,
}

impl GitTemplateSource {
    /// Source for the fixed production template.
    pub fn new() -> Self {
        Self {
            repository: TEMPLATE_REPOSITORY.into(),
        }
    }

    /// Clone from a different location. Seam for tests; the CLI always
    /// uses [`GitTemplateSource::new`].
    pub fn with_repository(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
        }
    }
}

impl Default for GitTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for GitTemplateSource {
    #[instrument(skip_all, fields(dest = %dest.display()))]
    fn fetch(&self, dest: &Path) -> SeedlingResult<()> {
        debug!(repository = %self.repository, "Cloning template");

        let status = Command::new("git")
            .args(["clone", "--depth", "1", &self.repository])
            .arg(dest)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::FetchFailed {
                reason: format!("failed to run git: {e}"),
            })?;

        if !status.success() {
            return Err(ApplicationError::FetchFailed {
                reason: format!("git clone exited with {status}"),
            }
            .into());
        }

        // The clone carries the template's history; drop it.
        let git_dir = dest.join(".git");
        if git_dir.exists() {
            std::fs::remove_dir_all(&git_dir).map_err(|e| ApplicationError::FetchFailed {
                reason: format!("failed to remove template history: {e}"),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal local git repository to clone from.
    fn template_repo(dir: &Path) {
        let run = |args: &[&str]| {
            let status = Command::new("git")
                .args(args)
                .current_dir(dir)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .expect("git must be available for this test");
            assert!(status.success(), "git {args:?} failed");
        };

        std::fs::write(dir.join("README.md"), "# Seedling Project Template\n").unwrap();
        run(&["init"]);
        run(&["add", "."]);
        run(&[
            "-c",
            "user.email=test@example.com",
            "-c",
            "user.name=test",
            "commit",
            "-m",
            "seed",
        ]);
    }

    #[test]
    fn fetch_clones_the_tree_and_strips_history() {
        let source_dir = tempfile::tempdir().unwrap();
        template_repo(source_dir.path());

        let dest_root = tempfile::tempdir().unwrap();
        let dest = dest_root.path().join("my-app");

        let source = GitTemplateSource::with_repository(source_dir.path().to_string_lossy());
        source.fetch(&dest).unwrap();

        assert!(dest.join("README.md").exists());
        assert!(!dest.join(".git").exists());
    }

    #[test]
    fn fetch_from_a_missing_repository_fails() {
        let dest_root = tempfile::tempdir().unwrap();
        let dest = dest_root.path().join("my-app");

        let source = GitTemplateSource::with_repository("/definitely/not/a/repo");
        let err = source.fetch(&dest).unwrap_err();
        assert!(err.to_string().contains("Template fetch failed"));
    }
}
