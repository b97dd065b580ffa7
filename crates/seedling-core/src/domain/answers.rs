//! Domain value objects: the answers collected before provisioning starts.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no I/O.
//! The wizard in the CLI crate constructs them; everything downstream
//! (materializer, provision service) reads them and never mutates them.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// The name doubles as the target directory name, so the rules are
/// directory-shaped: non-empty, no leading dot, no path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a raw name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot start with '.'".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot contain path separators".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The kind of project being provisioned.
///
/// Each variant carries the label and hint shown by the selection prompt,
/// plus the capability-activation instruction written into the assistant
/// rules file by the materializer. The mapping is fixed: one instruction
/// per variant, nothing configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Library,
    Api,
    Saas,
    Global,
}

impl ProjectKind {
    /// All variants, in prompt display order.
    pub const ALL: [ProjectKind; 4] = [Self::Library, Self::Api, Self::Saas, Self::Global];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Api => "api",
            Self::Saas => "saas",
            Self::Global => "global",
        }
    }

    /// Human label shown in the kind selection prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Library => "Library (performance & zero deps)",
            Self::Api => "Web API (clean & scalable)",
            Self::Saas => "Enterprise SaaS (global & robust)",
            Self::Global => "Global product (i18n & a11y)",
        }
    }

    /// Short hint rendered next to the label in the selection prompt.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Library => "Ideal for registry packages",
            Self::Api => "Ideal for backend services",
            Self::Saas => "Full suite of enterprise skills",
            Self::Global => "Focus on worldwide reach",
        }
    }

    /// The capability-activation line the materializer inserts into the
    /// assistant rules file.
    pub const fn activation_instruction(&self) -> &'static str {
        match self {
            Self::Library => "Activate: coding (Library Mode), testing, discipline, packaging",
            Self::Api => "Activate: coding (Application Mode), api, security, observability",
            Self::Saas => "Activate ALL production + enterprise skills",
            Self::Global => "Activate: global, privacy, scale",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "library" | "lib" => Ok(Self::Library),
            "api" => Ok(Self::Api),
            "saas" => Ok(Self::Saas),
            "global" => Ok(Self::Global),
            other => Err(DomainError::UnknownProjectKind(other.into())),
        }
    }
}

// ── ProjectAnswers ────────────────────────────────────────────────────────────

/// Everything the wizard collects. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnswers {
    name: ProjectName,
    description: String,
    kind: ProjectKind,
}

impl ProjectAnswers {
    pub fn new(name: ProjectName, description: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            name,
            description: description.into(),
            kind,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
