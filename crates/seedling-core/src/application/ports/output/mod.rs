//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `seedling-adapters` crate provides implementations.

use crate::error::SeedlingResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `seedling_adapters::filesystem::LocalFilesystem` (production)
/// - `seedling_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's full content as UTF-8.
    fn read_to_string(&self, path: &Path) -> SeedlingResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SeedlingResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SeedlingResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `seedling_adapters::template_source::GitTemplateSource` (production)
/// - `seedling_adapters::template_source::LocalTemplateSource` (testing/offline)
pub trait TemplateSource: Send + Sync {
    /// Populate `dest` with the template tree.
    ///
    /// The caller guarantees `dest` does not exist; the implementation must
    /// leave behind a plain file tree with no version-control history.
    fn fetch(&self, dest: &Path) -> SeedlingResult<()>;
}

/// Port for subprocess invocation.
///
/// Only success/failure is observed; stdout and stderr are never parsed.
///
/// Implemented by:
/// - `seedling_adapters::command::SystemCommandRunner` (production)
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, with the working directory set to `cwd`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> SeedlingResult<()>;
}
