// crates/domain/src/constraints/range.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use slide_access_shared_kernel::{Attribute, AttributeValue, DomainError, DomainResult, LimitationError};

/// Inclusive integer bound for one visitor attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeConstraint {
    minimum: i64,
    maximum: i64,
}

impl RangeConstraint {
    /// Builds a bound usable in `const` tables.
    ///
    /// # Panics
    ///
    /// Panics if `minimum > maximum`. In a `const` context this is a compile error.
    pub const fn new(minimum: i64, maximum: i64) -> Self {
        assert!(minimum <= maximum, "range minimum must not exceed maximum");
        Self { minimum, maximum }
    }

    /// Runtime counterpart of [`RangeConstraint::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if `minimum > maximum`.
    pub fn try_new(minimum: i64, maximum: i64) -> DomainResult<Self> {
        if minimum > maximum {
            return Err(DomainError::InvalidRange { min: minimum, max: maximum });
        }
        Ok(Self { minimum, maximum })
    }

    #[inline]
    pub const fn minimum(&self) -> i64 {
        self.minimum
    }

    #[inline]
    pub const fn maximum(&self) -> i64 {
        self.maximum
    }

    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Checks `value` for `attribute` and hands it back unchanged.
    ///
    /// The type is checked before the bounds, so `"ten"` is a type error even
    /// though it could never be in range either.
    ///
    /// # Errors
    ///
    /// - [`LimitationError::IncorrectType`] if `value` is not an integer.
    /// - [`LimitationError::OutOfRange`] if it lies outside `[minimum, maximum]`.
    pub fn validate(&self, attribute: Attribute, value: &AttributeValue) -> Result<i64, LimitationError> {
        let Some(v) = value.as_integer() else {
            return Err(LimitationError::IncorrectType { attribute, found: value.kind() });
        };

        if !self.contains(v) {
            return Err(LimitationError::OutOfRange {
                attribute,
                min: self.minimum,
                max: self.maximum,
                value: v,
            });
        }

        Ok(v)
    }
}

impl fmt::Display for RangeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)
    }
}
