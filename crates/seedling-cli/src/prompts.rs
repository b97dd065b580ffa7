//! Interactive wizard prompts.
//!
//! The answer collector: three questions (name, description, kind), then a
//! later confirmation for the install step.  Validation failures re-prompt
//! in place (dialoguer's validator loop); cancellation — Esc on a select,
//! or Ctrl-C anywhere, which dialoguer surfaces as an interrupted I/O error
//! — resolves to [`CliError::Cancelled`] so the session exits neutrally
//! before any side effect has happened.

use dialoguer::{Confirm, Input, Select, theme::Theme};

use seedling_core::domain::{ProjectAnswers, ProjectKind, ProjectName};

use crate::error::{CliError, CliResult};

/// Run the three collection prompts in order.
pub fn collect_answers(theme: &dyn Theme) -> CliResult<ProjectAnswers> {
    let name = project_name(theme)?;
    let description = project_description(theme)?;
    let kind = project_kind(theme)?;
    Ok(ProjectAnswers::new(name, description, kind))
}

fn project_name(theme: &dyn Theme) -> CliResult<ProjectName> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("What is your project named?")
        .validate_with(|input: &String| {
            ProjectName::new(input.as_str())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(map_prompt_error)?;

    // The validator already accepted it; this re-wraps into the newtype.
    ProjectName::new(raw).map_err(|e| CliError::Core(e.into()))
}

fn project_description(theme: &dyn Theme) -> CliResult<String> {
    Input::with_theme(theme)
        .with_prompt("Give it a short description")
        .allow_empty(true)
        .interact_text()
        .map_err(map_prompt_error)
}

fn project_kind(theme: &dyn Theme) -> CliResult<ProjectKind> {
    let items: Vec<String> = ProjectKind::ALL
        .iter()
        .map(|kind| format!("{} — {}", kind.label(), kind.hint()))
        .collect();

    let selected = Select::with_theme(theme)
        .with_prompt("What kind of project is this?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(map_prompt_error)?;

    match selected {
        Some(index) => Ok(ProjectKind::ALL[index]),
        None => Err(CliError::Cancelled),
    }
}

/// Ask whether to run the dependency install.
///
/// This sits past the last cancellation boundary: the template is already
/// on disk, so backing out here just means "no install", not a cancelled
/// session.
pub fn confirm_install(theme: &dyn Theme, default: bool) -> CliResult<bool> {
    let answer = Confirm::with_theme(theme)
        .with_prompt("Install dependencies?")
        .default(default)
        .interact_opt()
        .map_err(map_prompt_error)?;

    Ok(answer.unwrap_or(false))
}

fn map_prompt_error(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(io) => CliError::PromptFailed {
            message: "could not read from the terminal".into(),
            source: io,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The prompts themselves need a terminal; what we can pin down here is
    // the cancellation mapping they all rely on.

    #[test]
    fn interrupted_io_maps_to_cancelled() {
        let e = dialoguer::Error::IO(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(map_prompt_error(e), CliError::Cancelled));
    }

    #[test]
    fn other_io_errors_map_to_prompt_failure() {
        let e = dialoguer::Error::IO(std::io::Error::other("tty gone"));
        assert!(matches!(
            map_prompt_error(e),
            CliError::PromptFailed { .. }
        ));
    }
}
