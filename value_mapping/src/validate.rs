//! Validation of bind values against the remote value contract
//!
//! Scalars are accepted as-is apart from non-finite decimals. Sets must be
//! flat, homogeneous and free of duplicates.

use crate::types::{BindValue, ValueKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("Decimal value must be finite, got {0}")]
    NonFiniteDecimal(f64),

    #[error("Set values may not contain nested sets")]
    NestedSet,

    #[error("Set values must share one kind: expected {expected}, found {found}")]
    MixedSet { expected: ValueKind, found: ValueKind },

    #[error("Set contains a duplicate element at position {0}")]
    DuplicateElement(usize),
}

impl BindValue {
    /// Check the value the way the remote service would before executing a statement
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            BindValue::Decimal(d) if !d.is_finite() => Err(ValueError::NonFiniteDecimal(*d)),
            BindValue::Set(elements) => validate_set(elements),
            _ => Ok(()),
        }
    }
}

fn validate_set(elements: &[BindValue]) -> Result<(), ValueError> {
    let Some(first) = elements.first() else {
        return Ok(());
    };
    let expected = first.kind();

    for (position, element) in elements.iter().enumerate() {
        if element.is_set() {
            return Err(ValueError::NestedSet);
        }
        if element.kind() != expected {
            return Err(ValueError::MixedSet {
                expected,
                found: element.kind(),
            });
        }
        element.validate()?;
        if elements[..position].contains(element) {
            return Err(ValueError::DuplicateElement(position));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_scalars_are_valid() {
        assert!(BindValue::from("name").validate().is_ok());
        assert!(BindValue::from(42_i64).validate().is_ok());
        assert!(BindValue::from(true).validate().is_ok());
        let date = NaiveDate::from_ymd_opt(2018, 5, 1).unwrap();
        assert!(BindValue::from(date).validate().is_ok());
    }

    #[test]
    fn test_non_finite_decimal_rejected() {
        let err = BindValue::from(f64::NAN).validate().unwrap_err();
        assert!(matches!(err, ValueError::NonFiniteDecimal(_)));
        assert!(BindValue::from(f64::INFINITY).validate().is_err());
        assert!(BindValue::from(1.5).validate().is_ok());
    }

    #[test]
    fn test_empty_and_homogeneous_sets() {
        assert!(BindValue::Set(vec![]).validate().is_ok());
        assert!(BindValue::from(vec![1_i64, 2, 3]).validate().is_ok());
    }

    #[test]
    fn test_mixed_set_rejected() {
        let set = BindValue::Set(vec![BindValue::from(1_i64), BindValue::from("two")]);
        assert_eq!(
            set.validate(),
            Err(ValueError::MixedSet {
                expected: ValueKind::Number,
                found: ValueKind::Text,
            })
        );
    }

    #[test]
    fn test_nested_set_rejected() {
        let set = BindValue::Set(vec![BindValue::from(vec![1_i64])]);
        assert_eq!(set.validate(), Err(ValueError::NestedSet));
    }

    #[test]
    fn test_duplicate_set_element_rejected() {
        let set = BindValue::from(vec!["a", "b", "a"]);
        assert_eq!(set.validate(), Err(ValueError::DuplicateElement(2)));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(BindValue::from(7_i64)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Number", "value": 7 }));

        let back: BindValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, BindValue::Number(7));
    }
}
