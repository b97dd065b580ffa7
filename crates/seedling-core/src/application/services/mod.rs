//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "provision a project from the template".

pub mod provision_service;

pub use provision_service::{
    INITIAL_COMMIT_MESSAGE, PhaseOutcome, PostProvisionReport, ProvisionService,
};
