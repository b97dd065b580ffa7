//! Provision service - main application orchestrator.
//!
//! One service, three phases, driven in order by the CLI so it can render
//! progress between them:
//!
//! 1. `fetch` — clear any previous target directory, populate it from the
//!    template source. The only fatal phase.
//! 2. `materialize` — run the rewrite pipeline; per-step outcomes land in
//!    the report, never in an `Err`.
//! 3. `post_provision` — optional dependency install, then version-control
//!    init. Both non-fatal.
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        materializer::{MaterializeReport, Materializer},
        ports::{CommandRunner, Filesystem, TemplateSource},
    },
    domain::SessionContext,
    error::SeedlingResult,
};

/// Commit message for the initial commit in the provisioned repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "chore: initial commit from seedling template";

/// Outcome of one post-provisioning subprocess phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    Succeeded,
    Failed(String),
}

impl PhaseOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// What the post-provisioning phase did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProvisionReport {
    /// `None` when the user declined the install step.
    pub install: Option<PhaseOutcome>,
    /// Version-control initialization is always attempted.
    pub vcs: PhaseOutcome,
}

/// Main provisioning service.
///
/// Owns the semantics of each pipeline phase; the CLI owns the ordering,
/// the prompts, and the reporting around them.
pub struct ProvisionService {
    source: Box<dyn TemplateSource>,
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
}

impl ProvisionService {
    /// Create a new provision service with the given adapters.
    pub fn new(
        source: Box<dyn TemplateSource>,
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            runner,
            filesystem,
        }
    }

    /// Fetch phase.
    ///
    /// A pre-existing target directory is removed in its entirety first —
    /// destructive, with no confirmation beyond the user having named it.
    /// Any failure here is fatal to the session: the caller reports it and
    /// aborts without attempting materialization.
    #[instrument(skip_all, fields(target = %ctx.target_dir().display()))]
    pub fn fetch(&self, ctx: &SessionContext) -> SeedlingResult<()> {
        let target = ctx.target_dir();

        if self.filesystem.exists(target) {
            info!("Removing pre-existing target directory");
            self.filesystem.remove_dir_all(target)?;
        }

        self.source.fetch(target)?;
        info!("Template fetched");
        Ok(())
    }

    /// Materialization phase. Never fails the run; see
    /// [`MaterializeReport`] for per-step outcomes.
    #[instrument(skip_all)]
    pub fn materialize(&self, ctx: &SessionContext) -> MaterializeReport {
        Materializer::new(self.filesystem.as_ref()).run(ctx)
    }

    /// Post-provisioning phase: optional dependency install, then
    /// unconditional version-control initialization. Failures are recorded
    /// and reported, never propagated.
    #[instrument(skip(self, ctx))]
    pub fn post_provision(&self, ctx: &SessionContext, install: bool) -> PostProvisionReport {
        let install = install.then(|| self.install_dependencies(ctx));
        let vcs = self.init_repository(ctx);
        PostProvisionReport { install, vcs }
    }

    fn install_dependencies(&self, ctx: &SessionContext) -> PhaseOutcome {
        match self.runner.run("npm", &["install"], ctx.target_dir()) {
            Ok(()) => {
                info!("Dependencies installed");
                PhaseOutcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "Dependency install failed");
                PhaseOutcome::Failed(e.to_string())
            }
        }
    }

    /// `git init` / `git add .` / `git commit`. The first failure ends the
    /// sub-sequence; the session continues regardless.
    fn init_repository(&self, ctx: &SessionContext) -> PhaseOutcome {
        let target = ctx.target_dir();
        let steps: [&[&str]; 3] = [
            &["init"],
            &["add", "."],
            &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        ];
        for args in steps {
            if let Err(e) = self.run_git(args, target) {
                warn!(error = %e, "Repository initialization failed");
                return PhaseOutcome::Failed(e.to_string());
            }
        }
        info!("Repository initialized");
        PhaseOutcome::Succeeded
    }

    fn run_git(&self, args: &[&str], cwd: &Path) -> SeedlingResult<()> {
        self.runner.run("git", args, cwd)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
