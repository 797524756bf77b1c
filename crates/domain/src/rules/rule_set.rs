// crates/domain/src/rules/rule_set.rs
use serde::Serialize;
use slide_access_shared_kernel::{Attribute, AttributeValue, LimitationError};

use super::RuleCategory;
use crate::model::VisitorProfile;

/// A rule-set whose three attributes all passed their category bounds.
///
/// The only way to obtain one is [`LimitationRuleSet::new`], which either
/// validates every attribute or returns the first failure. There is no
/// partially validated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitationRuleSet {
    category: RuleCategory,
    age: i64,
    weight: i64,
    height: i64,
}

impl LimitationRuleSet {
    /// Validates `age`, `weight` and `height` in that order against `category`.
    ///
    /// # Errors
    ///
    /// Returns the [`LimitationError`] of the first attribute that fails;
    /// later attributes are not inspected.
    pub fn new(
        category: RuleCategory,
        age: &AttributeValue,
        weight: &AttributeValue,
        height: &AttributeValue,
    ) -> Result<Self, LimitationError> {
        let values = [age, weight, height];
        let mut validated = [0_i64; 3];

        for ((attribute, constraint), (slot, value)) in category
            .constraints()
            .into_iter()
            .zip(validated.iter_mut().zip(values))
        {
            *slot = constraint.validate(attribute, value)?;
        }

        let [age, weight, height] = validated;
        Ok(Self { category, age, weight, height })
    }

    /// Builds the rule-set from a visitor's attributes.
    ///
    /// # Errors
    ///
    /// See [`LimitationRuleSet::new`].
    pub fn for_visitor(category: RuleCategory, visitor: &VisitorProfile) -> Result<Self, LimitationError> {
        Self::new(category, visitor.age(), visitor.weight(), visitor.height())
    }

    #[inline]
    pub const fn category(&self) -> RuleCategory {
        self.category
    }

    #[inline]
    pub const fn age(&self) -> i64 {
        self.age
    }

    #[inline]
    pub const fn weight(&self) -> i64 {
        self.weight
    }

    #[inline]
    pub const fn height(&self) -> i64 {
        self.height
    }

    pub const fn value(&self, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::Age => self.age,
            Attribute::Weight => self.weight,
            Attribute::Height => self.height,
        }
    }
}
