// crates/usecase/src/dto.rs
use serde::Serialize;
use slide_access_domain::{DenialKind, RuleCategory, Slide, VisitorProfile};

#[derive(Debug, Clone, Default)]
pub struct CheckAccessInput {
    pub slides: Vec<Slide>,
    pub visitors: Vec<VisitorProfile>,
}

/// Result of one visitor/slide pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessOutcome {
    pub slide: String,
    pub category: RuleCategory,
    pub visitor: String,
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DenialKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessReport {
    pub outcomes: Vec<AccessOutcome>,
}

impl AccessReport {
    pub fn granted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.granted).count()
    }

    pub fn denied(&self) -> usize {
        self.outcomes.len() - self.granted()
    }

    pub fn all_granted(&self) -> bool {
        self.outcomes.iter().all(|o| o.granted)
    }
}
