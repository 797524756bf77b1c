// crates/domain/src/model/entities/slide.rs
use serde::{Deserialize, Serialize};

use crate::model::{AccessDecision, Denial, VisitorProfile};
use crate::rules::{LimitationRuleSet, RuleCategory};

/// An attraction bound to exactly one rule category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    name: String,
    category: RuleCategory,
}

impl Slide {
    pub fn new(name: impl Into<String>, category: RuleCategory) -> Self {
        Self { name: name.into(), category }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn category(&self) -> RuleCategory {
        self.category
    }

    /// Builds this slide's rule-set from the visitor's attributes.
    ///
    /// Both visitor-data failure kinds become a [`Denial`]; there is no other
    /// way for rule-set construction to fail.
    pub fn evaluate(&self, visitor: &VisitorProfile) -> AccessDecision {
        match LimitationRuleSet::for_visitor(self.category, visitor) {
            Ok(rules) => AccessDecision::Granted(rules),
            Err(err) => AccessDecision::Denied(Denial::new(err)),
        }
    }

    /// Returns whether `visitor` may ride, logging the reason when not.
    pub fn can_access(&self, visitor: &VisitorProfile) -> bool {
        match self.evaluate(visitor) {
            AccessDecision::Granted(_) => true,
            AccessDecision::Denied(denial) => {
                tracing::warn!(
                    slide = %self.name,
                    visitor = %visitor.name(),
                    attribute = %denial.attribute(),
                    kind = %denial.kind(),
                    "{}",
                    denial.diagnostic(visitor.name())
                );
                false
            }
        }
    }
}
