// crates/domain/src/rules/category.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slide_access_shared_kernel::{Attribute, DomainError};

use crate::constraints::RangeConstraint;

/// Bounds for one visitor category, one constraint per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CategoryBounds {
    age: RangeConstraint,
    weight: RangeConstraint,
    height: RangeConstraint,
}

const CHILDREN: CategoryBounds = CategoryBounds {
    age: RangeConstraint::new(4, 14),
    weight: RangeConstraint::new(20, 50),
    height: RangeConstraint::new(80, 120),
};

// Age 14 overlaps with CHILDREN on purpose: the slide decides the category.
const ADULT: CategoryBounds = CategoryBounds {
    age: RangeConstraint::new(14, 60),
    weight: RangeConstraint::new(50, 120),
    height: RangeConstraint::new(120, 220),
};

/// Rule category a slide is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Children,
    Adult,
}

impl RuleCategory {
    pub const ALL: [Self; 2] = [Self::Children, Self::Adult];

    const fn bounds(self) -> CategoryBounds {
        match self {
            Self::Children => CHILDREN,
            Self::Adult => ADULT,
        }
    }

    /// Constraint applied to `attribute` for this category.
    pub const fn constraint(self, attribute: Attribute) -> RangeConstraint {
        let bounds = self.bounds();
        match attribute {
            Attribute::Age => bounds.age,
            Attribute::Weight => bounds.weight,
            Attribute::Height => bounds.height,
        }
    }

    /// All `(attribute, constraint)` pairs in validation order.
    pub const fn constraints(self) -> [(Attribute, RangeConstraint); 3] {
        [
            (Attribute::Age, self.constraint(Attribute::Age)),
            (Attribute::Weight, self.constraint(Attribute::Weight)),
            (Attribute::Height, self.constraint(Attribute::Height)),
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Adult => "adult",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "children" | "child" | "kids" => Ok(Self::Children),
            "adult" | "adults" => Ok(Self::Adult),
            _ => Err(DomainError::UnknownCategory { name: s.to_string() }),
        }
    }
}
