pub mod category;
pub mod rule_set;

pub use category::RuleCategory;
pub use rule_set::LimitationRuleSet;
