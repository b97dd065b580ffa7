//! The interactive provisioning wizard — what runs when `seedling` is
//! invoked with no subcommand.
//!
//! Responsibility: collect answers, drive the pipeline phases in order, and
//! render progress around them.  Phase semantics live in
//! `seedling_core::ProvisionService`; no business logic lives here.

use std::env;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use tracing::{info, instrument};

use seedling_adapters::{GitTemplateSource, LocalFilesystem, SystemCommandRunner};
use seedling_core::{
    application::{
        MaterializeReport, PhaseOutcome, ProvisionService, SkipReason, StepStatus,
    },
    domain::SessionContext,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompts,
};

/// Execute the wizard.
///
/// Sequence:
/// 1. Banner, then the three collection prompts (cancellable, no side effects)
/// 2. Fetch the template — the only fatal phase
/// 3. Materialize the answers into the tree (per-step warnings)
/// 4. Confirm install, run post-provisioning (non-fatal)
/// 5. Next-steps summary
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.banner("Seedling — plant a new project")?;

    let theme: Box<dyn Theme> = if output.supports_color() {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    };

    // 1. Collect answers. Everything up to here is free of side effects, so
    //    a cancellation at any prompt leaves no trace behind.
    let answers = prompts::collect_answers(theme.as_ref())?;

    let cwd = env::current_dir().with_cli_context(|| "failed to resolve current directory")?;
    let ctx = SessionContext::new(cwd, answers);
    info!(target_dir = %ctx.target_dir().display(), "Session started");

    let service = ProvisionService::new(
        Box::new(GitTemplateSource::new()),
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 2. Fetch. A stale target directory is cleared inside this phase.
    let spinner = output.spinner("Fetching template...");
    let fetched = service.fetch(&ctx);
    spinner.finish();
    match fetched {
        Ok(()) => output.success("Template downloaded")?,
        Err(e) => {
            output.error("Failed to download template")?;
            return Err(CliError::Core(e));
        }
    }

    // 3. Materialize.
    let spinner = output.spinner("Tailoring your project...");
    let report = service.materialize(&ctx);
    spinner.finish();
    render_materialize_report(&report, &output)?;

    // 4. Post-provisioning: optional install, then git init/add/commit.
    let install = prompts::confirm_install(theme.as_ref(), config.defaults.install)?;
    let spinner = output.spinner(if install {
        "Installing dependencies and initializing git..."
    } else {
        "Initializing git repository..."
    });
    let post = service.post_provision(&ctx, install);
    spinner.finish();

    match &post.install {
        Some(PhaseOutcome::Succeeded) => output.success("Dependencies installed")?,
        Some(PhaseOutcome::Failed(_)) => {
            output.warning("npm install failed. You may need to run it manually.")?
        }
        None => {}
    }
    match &post.vcs {
        PhaseOutcome::Succeeded => output.success("Git repository initialized")?,
        PhaseOutcome::Failed(_) => output.warning("Git initialization failed")?,
    }

    // 5. Closing summary.
    let name = ctx.answers().name().clone();
    let installed = matches!(post.install, Some(PhaseOutcome::Succeeded));

    output.print("")?;
    output.header(&format!("Your project {name} is ready!"))?;
    output.print("")?;
    output.print(&format!("  cd {name}"))?;
    if !installed {
        output.print("  npm install")?;
    }
    output.print("  npm run docs:dev")?;
    output.print("")?;

    Ok(())
}

/// Surface per-step outcomes.  Applied steps and files the template simply
/// doesn't ship are silent; everything else gets a diagnostic line.
fn render_materialize_report(report: &MaterializeReport, output: &OutputManager) -> CliResult<()> {
    for entry in report.steps() {
        match &entry.status {
            StepStatus::Applied | StepStatus::Skipped(SkipReason::FileMissing) => {}
            StepStatus::Skipped(SkipReason::AlreadyApplied) => {
                output.info(&format!("{}: already tailored, left as is", entry.step))?;
            }
            StepStatus::Skipped(SkipReason::AnchorMissing) => {
                output.warning(&format!(
                    "{}: insertion anchor not found, file left untouched",
                    entry.step
                ))?;
            }
            StepStatus::Failed(reason) => {
                output.warning(&format!("{}: {}", entry.step, reason))?;
            }
        }
    }

    if report.is_clean() {
        output.success("Project tailored")?;
    }
    Ok(())
}
