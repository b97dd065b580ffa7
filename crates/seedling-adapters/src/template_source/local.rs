//! Local-directory template source.
//!
//! Copies a template tree from a directory already on disk. Used by tests
//! and offline development; the production pipeline fetches over git.

use std::path::{Path, PathBuf};

use tracing::instrument;
use walkdir::WalkDir;

use seedling_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::SeedlingResult,
};

/// Copies a template from a local directory.
#[derive(Debug, Clone)]
pub struct LocalTemplateSource {
    root: PathBuf,
}

impl LocalTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for LocalTemplateSource {
    #[instrument(skip_all, fields(dest = %dest.display()))]
    fn fetch(&self, dest: &Path) -> SeedlingResult<()> {
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| ApplicationError::FetchFailed {
                reason: format!("failed to walk template directory: {e}"),
            })?;

            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .expect("walkdir yields paths under its root");

            // The source may itself be a checkout; its history is not part
            // of the template.
            if rel.starts_with(".git") {
                continue;
            }

            let target = dest.join(rel);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
            } else {
                std::fs::copy(entry.path(), &target).map(|_| ())
            }
            .map_err(|e| ApplicationError::FetchFailed {
                reason: format!("failed to copy {}: {e}", rel.display()),
            })?;
        }
        Ok(())
    }
}
