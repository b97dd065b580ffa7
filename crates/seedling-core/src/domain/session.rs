//! The session context threaded through every pipeline phase.

use std::path::{Path, PathBuf};

use crate::domain::answers::ProjectAnswers;

/// Explicit record of the one provisioning session.
///
/// Built once, right after the wizard completes. Every later phase reads
/// the working directory and target directory from here instead of ambient
/// process state, so the whole pipeline is a function of this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    cwd: PathBuf,
    answers: ProjectAnswers,
    target_dir: PathBuf,
}

impl SessionContext {
    /// Derive the context from the invocation directory and the answers.
    ///
    /// The target directory is always `cwd/<name>`; the name validation in
    /// [`ProjectName`](crate::domain::ProjectName) guarantees it is a single
    /// path component.
    pub fn new(cwd: PathBuf, answers: ProjectAnswers) -> Self {
        let target_dir = cwd.join(answers.name().as_str());
        Self {
            cwd,
            answers,
            target_dir,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn answers(&self) -> &ProjectAnswers {
        &self.answers
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}
