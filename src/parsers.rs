// src/parsers.rs
use std::str::FromStr;

use slide_access_domain::{RuleCategory, Slide, VisitorProfile};
use slide_access_shared_kernel::{Attribute, AttributeValue, DomainError};

/// `--slide NAME=CATEGORY`
#[derive(Debug, Clone)]
pub struct SlideArg(pub Slide);

impl FromStr for SlideArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| {
            DomainError::InvalidSlide { input: s.to_string(), reason: reason.to_string() }.to_string()
        };

        let (name, category) = s.rsplit_once('=').ok_or_else(|| invalid("expected NAME=CATEGORY"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("slide name is empty"));
        }
        let category: RuleCategory = category.parse().map_err(|e: DomainError| e.to_string())?;
        Ok(Self(Slide::new(name, category)))
    }
}

/// `--visitor name=Ann,age=10,weight=30,height=100`
///
/// Attribute values are never rejected here; `age=ten` is passed through so
/// the access check reports it as a type error.
#[derive(Debug, Clone)]
pub struct VisitorArg(pub VisitorProfile);

impl FromStr for VisitorArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| {
            DomainError::InvalidVisitor { input: s.to_string(), reason }.to_string()
        };

        let mut name: Option<String> = None;
        let mut values: [Option<AttributeValue>; 3] = [None, None, None];

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| invalid(format!("expected key=value, got '{part}'")))?;
            let key = key.trim();

            if key.eq_ignore_ascii_case("name") {
                if name.is_some() {
                    return Err(invalid("name given twice".into()));
                }
                name = Some(value.trim().to_string());
                continue;
            }

            let attribute: Attribute = key.parse().map_err(invalid)?;
            let slot = &mut values[attribute_index(attribute)];
            if slot.is_some() {
                return Err(invalid(format!("{attribute} given twice")));
            }
            *slot = Some(AttributeValue::parse_lenient(value));
        }

        let name = name.filter(|n| !n.is_empty()).ok_or_else(|| invalid("missing name".into()))?;
        let [age, weight, height] = values;
        let missing = |attribute: Attribute| invalid(format!("missing {attribute}"));

        Ok(Self(VisitorProfile::new(
            name,
            age.ok_or_else(|| missing(Attribute::Age))?,
            weight.ok_or_else(|| missing(Attribute::Weight))?,
            height.ok_or_else(|| missing(Attribute::Height))?,
        )))
    }
}

const fn attribute_index(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Age => 0,
        Attribute::Weight => 1,
        Attribute::Height => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_arg_splits_on_last_equals() {
        let SlideArg(slide) = "Wave=Pool=adult".parse().unwrap();
        assert_eq!(slide.name(), "Wave=Pool");
        assert_eq!(slide.category(), RuleCategory::Adult);
    }

    #[test]
    fn slide_arg_rejects_unknown_category() {
        let err = "Wave=teens".parse::<SlideArg>().unwrap_err();
        assert!(err.contains("Unknown rule category 'teens'"));
    }

    #[test]
    fn visitor_arg_accepts_any_order() {
        let VisitorArg(visitor) = "height=100, age=10, name=Ann, weight=30".parse().unwrap();
        assert_eq!(visitor, VisitorProfile::new("Ann", 10, 30, 100));
    }

    #[test]
    fn visitor_arg_keeps_non_integer_values() {
        let VisitorArg(visitor) = "name=Max,age=ten,weight=30.5,height=100".parse().unwrap();
        assert_eq!(visitor.age(), &AttributeValue::Text("ten".into()));
        assert_eq!(visitor.weight(), &AttributeValue::Float(30.5));
    }

    #[test]
    fn visitor_arg_reports_structural_problems() {
        let missing = "name=Ann,age=10,weight=30".parse::<VisitorArg>().unwrap_err();
        assert!(missing.ends_with("missing height"));

        let twice = "name=Ann,age=10,age=11,weight=30,height=100".parse::<VisitorArg>().unwrap_err();
        assert!(twice.ends_with("age given twice"));

        let unknown = "name=Ann,shoe=42".parse::<VisitorArg>().unwrap_err();
        assert!(unknown.contains("Unknown attribute: shoe"));

        let nameless = "age=10,weight=30,height=100".parse::<VisitorArg>().unwrap_err();
        assert!(nameless.ends_with("missing name"));
    }

    #[test]
    fn visitor_arg_rejects_a_second_name() {
        let err = "name=Ann,age=10,name=Bo,weight=30,height=100".parse::<VisitorArg>().unwrap_err();
        assert!(err.ends_with("name given twice"));
    }
}
