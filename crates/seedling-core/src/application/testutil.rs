//! In-crate test doubles for the output ports.
//!
//! The adapters crate ships the production implementations (and a shareable
//! `MemoryFilesystem`); these fakes exist so core unit tests need no
//! dependency on the adapters crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use crate::application::ApplicationError;
use crate::application::ports::{CommandRunner, Filesystem, TemplateSource};
use crate::error::SeedlingResult;

// ── FakeFilesystem ────────────────────────────────────────────────────────────

/// Path → content map. Directories exist implicitly: a path "exists" when
/// any stored file lives at or under it.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl FakeFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub(crate) fn content(&self, path: &str) -> String {
        self.files
            .read()
            .unwrap()
            .get(Path::new(path))
            .cloned()
            .unwrap_or_else(|| panic!("no such file: {path}"))
    }

    pub(crate) fn has(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(Path::new(path))
    }

    pub(crate) fn file_count(&self) -> usize {
        self.files.read().unwrap().len()
    }
}

impl Filesystem for FakeFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .keys()
            .any(|p| p == path || p.starts_with(path))
    }

    fn read_to_string(&self, path: &Path) -> SeedlingResult<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "file not found".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> SeedlingResult<()> {
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> SeedlingResult<()> {
        self.files
            .write()
            .unwrap()
            .retain(|p, _| !(p == path || p.starts_with(path)));
        Ok(())
    }
}

// ── FakeTemplateSource ────────────────────────────────────────────────────────

/// Writes a canned file set into the destination, or fails on demand.
pub(crate) struct FakeTemplateSource {
    filesystem: FakeFilesystem,
    files: Vec<(&'static str, &'static str)>,
    fail_with: Option<&'static str>,
}

impl FakeTemplateSource {
    pub(crate) fn new(
        filesystem: FakeFilesystem,
        files: Vec<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            filesystem,
            files,
            fail_with: None,
        }
    }

    pub(crate) fn failing(filesystem: FakeFilesystem, reason: &'static str) -> Self {
        Self {
            filesystem,
            files: Vec::new(),
            fail_with: Some(reason),
        }
    }
}

impl TemplateSource for FakeTemplateSource {
    fn fetch(&self, dest: &Path) -> SeedlingResult<()> {
        if let Some(reason) = self.fail_with {
            return Err(ApplicationError::FetchFailed {
                reason: reason.into(),
            }
            .into());
        }
        for (rel, content) in &self.files {
            self.filesystem.write_file(&dest.join(rel), content)?;
        }
        Ok(())
    }
}

// ── FakeCommandRunner ─────────────────────────────────────────────────────────

/// Records every invocation; optionally fails a specific program.
/// Clones share the same call log.
#[derive(Clone, Default)]
pub(crate) struct FakeCommandRunner {
    calls: Arc<Mutex<Vec<(String, Vec<String>, PathBuf)>>>,
    fail_program: Option<&'static str>,
}

impl FakeCommandRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_on(program: &'static str) -> Self {
        Self {
            calls: Arc::default(),
            fail_program: Some(program),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<String>, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> SeedlingResult<()> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
            cwd.to_path_buf(),
        ));
        if self.fail_program == Some(program) {
            return Err(ApplicationError::CommandFailed {
                command: format!("{program} {}", args.join(" ")),
                reason: "exit status 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
