//! Core domain layer for Seedling.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O — the template fetch, the file rewrites, the subprocess calls —
//! happens behind ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable values**: Answers and session context never mutate

// Public API - what the world sees
pub mod answers;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use answers::{ProjectAnswers, ProjectKind, ProjectName};
pub use error::{DomainError, ErrorCategory};
pub use session::SessionContext;
