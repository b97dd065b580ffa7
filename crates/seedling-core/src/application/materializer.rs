//! The materialization pipeline.
//!
//! After the template tree lands on disk, a fixed ordered sequence of file
//! rewrites stamps the user's answers into it:
//!
//! 1. **Package descriptor** (`package.json`): `name` and `description`
//!    fields are set from the answers; every other field is preserved.
//! 2. **Assistant rules** (`.cursorrules`): an activation line derived from
//!    the project kind is inserted ahead of a fixed anchor substring.
//! 3. **README** (`README.md`): the placeholder title and description are
//!    replaced with the answers, globally.
//!
//! Every step is guarded by file presence — the template's exact file set is
//! not guaranteed here, so a missing target file is a skip, never an error.
//!
//! Failure policy is best-effort isolation: each step always attempts, and a
//! failure in one (e.g. a malformed manifest) is recorded in the
//! [`MaterializeReport`] without stopping the others. The steps share no
//! state and each owns exactly one file, so there is no order in which a
//! failure could poison a later step.

use std::fmt;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::ports::Filesystem;
use crate::domain::{ProjectAnswers, SessionContext};

/// File rewritten by the package-descriptor step.
pub const MANIFEST_FILE: &str = "package.json";
/// File rewritten by the assistant-rules step.
pub const RULES_FILE: &str = ".cursorrules";
/// File rewritten by the README step.
pub const README_FILE: &str = "README.md";

/// Insertion point for the activation line in the rules file.
pub const RULES_ANCHOR: &str = "Tell the AI which skills to use:";
/// Prefix of the inserted activation line. Doubles as the idempotence
/// marker: a file that already contains it is never annotated twice.
pub const ACTIVATION_MARKER: &str = "AUTO-ACTIVATED:";

/// Placeholder title replaced throughout the README.
pub const PLACEHOLDER_TITLE: &str = "Seedling Project Template";
/// Placeholder description replaced throughout the README.
pub const PLACEHOLDER_DESCRIPTION: &str = "A universal project template";

// ── Step outcomes ─────────────────────────────────────────────────────────────

/// Identity of one rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Manifest,
    Rules,
    Readme,
}

impl StepKind {
    /// The three steps, in execution order.
    pub const ALL: [StepKind; 3] = [Self::Manifest, Self::Rules, Self::Readme];

    /// The file this step exclusively owns, relative to the target directory.
    pub const fn target_file(&self) -> &'static str {
        match self {
            Self::Manifest => MANIFEST_FILE,
            Self::Rules => RULES_FILE,
            Self::Readme => README_FILE,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_file())
    }
}

/// Why a step wrote nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The target file is not part of the fetched template.
    FileMissing,
    /// The activation marker is already present; a second run must not
    /// duplicate the line.
    AlreadyApplied,
    /// The anchor substring was not found. The file is left untouched and
    /// the skip is surfaced as a diagnostic rather than silently ignored.
    AnchorMissing,
}

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Applied,
    Skipped(SkipReason),
    Failed(String),
}

impl StepStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Per-step record in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: StepKind,
    pub status: StepStatus,
}

/// Outcome of one materializer run, one entry per step in execution order.
///
/// The report is the materializer's only output besides the file writes
/// themselves; the CLI renders it and the tests assert against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    steps: Vec<StepReport>,
}

impl MaterializeReport {
    fn record(&mut self, step: StepKind, status: StepStatus) {
        self.steps.push(StepReport { step, status });
    }

    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Status of a specific step, if it ran.
    pub fn status_of(&self, kind: StepKind) -> Option<&StepStatus> {
        self.steps.iter().find(|r| r.step == kind).map(|r| &r.status)
    }

    /// Steps that failed outright.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|r| r.status.is_failure())
    }

    /// `true` when no step failed and no diagnostic skip occurred.
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(|r| {
            matches!(
                r.status,
                StepStatus::Applied
                    | StepStatus::Skipped(SkipReason::FileMissing)
                    | StepStatus::Skipped(SkipReason::AlreadyApplied)
            )
        })
    }
}

// ── Materializer ──────────────────────────────────────────────────────────────

/// Applies the fixed rewrite sequence to a fetched template tree.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Run all steps against the session's target directory.
    ///
    /// Never returns an error: per-step failures are isolated into the
    /// report so the remaining steps still get their attempt.
    #[instrument(skip_all, fields(target = %ctx.target_dir().display()))]
    pub fn run(&self, ctx: &SessionContext) -> MaterializeReport {
        let dir = ctx.target_dir();
        let answers = ctx.answers();

        let mut report = MaterializeReport { steps: Vec::new() };
        for step in StepKind::ALL {
            let status = match step {
                StepKind::Manifest => self.rewrite_manifest(dir, answers),
                StepKind::Rules => self.rewrite_rules(dir, answers),
                StepKind::Readme => self.rewrite_readme(dir, answers),
            };
            if let StepStatus::Failed(reason) = &status {
                warn!(file = step.target_file(), %reason, "Materialization step failed");
            } else {
                debug!(file = step.target_file(), ?status, "Materialization step done");
            }
            report.record(step, status);
        }
        report
    }

    /// Step 1: set `name` and `description` in the package manifest,
    /// preserving all other fields, 2-space indentation on the way out.
    fn rewrite_manifest(&self, dir: &Path, answers: &ProjectAnswers) -> StepStatus {
        let path = dir.join(MANIFEST_FILE);
        if !self.filesystem.exists(&path) {
            return StepStatus::Skipped(SkipReason::FileMissing);
        }

        let raw = match self.filesystem.read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => return StepStatus::Failed(e.to_string()),
        };

        // A present-but-malformed manifest fails this step only; the other
        // steps still run.
        let mut manifest: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => return StepStatus::Failed(format!("malformed JSON: {e}")),
        };
        let Some(fields) = manifest.as_object_mut() else {
            return StepStatus::Failed("manifest root is not a JSON object".into());
        };

        fields.insert(
            "name".into(),
            serde_json::Value::String(answers.name().as_str().into()),
        );
        fields.insert(
            "description".into(),
            serde_json::Value::String(answers.description().into()),
        );

        // to_string_pretty emits 2-space indentation.
        let serialized = match serde_json::to_string_pretty(&manifest) {
            Ok(s) => s,
            Err(e) => return StepStatus::Failed(e.to_string()),
        };
        match self.filesystem.write_file(&path, &format!("{serialized}\n")) {
            Ok(()) => StepStatus::Applied,
            Err(e) => StepStatus::Failed(e.to_string()),
        }
    }

    /// Step 2: insert the activation line for the chosen project kind ahead
    /// of the anchor substring in the assistant rules file.
    fn rewrite_rules(&self, dir: &Path, answers: &ProjectAnswers) -> StepStatus {
        let path = dir.join(RULES_FILE);
        if !self.filesystem.exists(&path) {
            return StepStatus::Skipped(SkipReason::FileMissing);
        }

        let raw = match self.filesystem.read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => return StepStatus::Failed(e.to_string()),
        };

        if raw.contains(ACTIVATION_MARKER) {
            return StepStatus::Skipped(SkipReason::AlreadyApplied);
        }
        if !raw.contains(RULES_ANCHOR) {
            return StepStatus::Skipped(SkipReason::AnchorMissing);
        }

        let line = format!(
            "{ACTIVATION_MARKER} {}",
            answers.kind().activation_instruction()
        );
        let updated = raw.replacen(RULES_ANCHOR, &format!("{line}\n\n{RULES_ANCHOR}"), 1);
        match self.filesystem.write_file(&path, &updated) {
            Ok(()) => StepStatus::Applied,
            Err(e) => StepStatus::Failed(e.to_string()),
        }
    }

    /// Step 3: global literal replacement of the README placeholders.
    fn rewrite_readme(&self, dir: &Path, answers: &ProjectAnswers) -> StepStatus {
        let path = dir.join(README_FILE);
        if !self.filesystem.exists(&path) {
            return StepStatus::Skipped(SkipReason::FileMissing);
        }

        let raw = match self.filesystem.read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => return StepStatus::Failed(e.to_string()),
        };

        let updated = raw
            .replace(PLACEHOLDER_TITLE, answers.name().as_str())
            .replace(PLACEHOLDER_DESCRIPTION, answers.description());
        match self.filesystem.write_file(&path, &updated) {
            Ok(()) => StepStatus::Applied,
            Err(e) => StepStatus::Failed(e.to_string()),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
