// crates/shared-kernel/src/value_objects/attribute.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visitor attributes checked by a rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Age,
    Weight,
    Height,
}

impl Attribute {
    /// Validation order used when a rule-set is built.
    pub const ALL: [Self; 3] = [Self::Age, Self::Weight, Self::Height];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(Self::Age),
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            other => Err(format!("Unknown attribute: {other}")),
        }
    }
}
