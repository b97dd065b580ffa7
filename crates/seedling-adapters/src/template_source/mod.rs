//! Template source adapters.

mod git;
mod local;

pub use git::{GitTemplateSource, TEMPLATE_REPOSITORY};
pub use local::LocalTemplateSource;
