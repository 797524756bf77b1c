//! # Domain
//!
//! Slide access rules and the entities they are checked against.
//!
//! - [`constraints`]: inclusive integer bounds for a single attribute
//! - [`rules`]: visitor categories and the validated rule-set built from them
//! - [`model`]: visitors, slides and the outcome of an access check

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod constraints;
pub mod model;
pub mod rules;

pub use constraints::RangeConstraint;
pub use model::{AccessDecision, Denial, DenialKind, Slide, VisitorProfile};
pub use rules::{LimitationRuleSet, RuleCategory};
