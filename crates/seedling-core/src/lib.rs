//! Seedling Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Seedling
//! project-provisioning tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          seedling-cli (CLI)             │
//! │   (wizard, reporting, exit codes)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProvisionService: fetch/materialize/  │
//! │   post-provision, strictly sequential)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateSource, Runner)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    seedling-adapters (Infrastructure)   │
//! │ (LocalFilesystem, GitTemplateSource,    │
//! │  SystemCommandRunner, test doubles)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectAnswers, ProjectKind,          │
//! │   SessionContext — no I/O)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seedling_core::{
//!     application::ProvisionService,
//!     domain::{ProjectAnswers, ProjectKind, ProjectName, SessionContext},
//! };
//!
//! // 1. Collect answers (the CLI wizard does this interactively)
//! let answers = ProjectAnswers::new(
//!     ProjectName::new("my-app").unwrap(),
//!     "A fresh project",
//!     ProjectKind::Api,
//! );
//! let ctx = SessionContext::new(std::env::current_dir().unwrap(), answers);
//!
//! // 2. Use the service (with injected adapters)
//! let service = ProvisionService::new(source, runner, filesystem);
//! service.fetch(&ctx).unwrap();
//! let report = service.materialize(&ctx);
//! let post = service.post_provision(&ctx, true);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeReport, Materializer, PhaseOutcome, PostProvisionReport, ProvisionService,
        SkipReason, StepKind, StepStatus,
        ports::{CommandRunner, Filesystem, TemplateSource},
    };
    pub use crate::domain::{ProjectAnswers, ProjectKind, ProjectName, SessionContext};
    pub use crate::error::{SeedlingError, SeedlingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
