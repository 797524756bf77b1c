pub mod decision;
pub mod entities;

pub use decision::{AccessDecision, Denial, DenialKind};
pub use entities::{Slide, VisitorProfile};
