//! Application layer for Seedling.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProvisionService)
//! - **Materializer**: the fixed rewrite pipeline applied to a fetched tree
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules about what a valid answer is. Those live in `crate::domain`.

pub mod error;
pub mod materializer;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main services
pub use services::{PhaseOutcome, PostProvisionReport, ProvisionService};

// Re-export the materialization pipeline types
pub use materializer::{
    MaterializeReport, Materializer, SkipReason, StepKind, StepReport, StepStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, TemplateSource};

pub use error::ApplicationError;
