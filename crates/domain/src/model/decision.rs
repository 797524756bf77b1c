// crates/domain/src/model/decision.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use slide_access_shared_kernel::{Attribute, LimitationError};

use crate::rules::LimitationRuleSet;

/// Outcome of checking one visitor against one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(LimitationRuleSet),
    Denied(Denial),
}

impl AccessDecision {
    #[inline]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub const fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Granted(_) => None,
            Self::Denied(denial) => Some(denial),
        }
    }
}

/// Why a visitor was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DenialKind {
    /// An attribute was not an integer.
    IncorrectType,
    /// An attribute was an integer outside its bound.
    RequirementsNotMet,
}

impl DenialKind {
    pub const fn headline(self) -> &'static str {
        match self {
            Self::IncorrectType => "has an attribute with incorrect type!",
            Self::RequirementsNotMet => "doesn't meet the requirements!",
        }
    }
}

impl fmt::Display for DenialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectType => f.write_str("incorrect-type"),
            Self::RequirementsNotMet => f.write_str("requirements-not-met"),
        }
    }
}

/// A rejected rule-set construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    error: LimitationError,
}

impl Denial {
    pub const fn new(error: LimitationError) -> Self {
        Self { error }
    }

    pub const fn kind(&self) -> DenialKind {
        match self.error {
            LimitationError::IncorrectType { .. } => DenialKind::IncorrectType,
            LimitationError::OutOfRange { .. } => DenialKind::RequirementsNotMet,
        }
    }

    #[inline]
    pub const fn error(&self) -> &LimitationError {
        &self.error
    }

    #[inline]
    pub const fn attribute(&self) -> Attribute {
        self.error.attribute()
    }

    /// Human-readable message shown to the visitor.
    pub fn diagnostic(&self, visitor_name: &str) -> String {
        format!("{visitor_name} can't access, {} {}", self.kind().headline(), self.error)
    }
}
