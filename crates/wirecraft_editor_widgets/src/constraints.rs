// SPDX-License-Identifier: MIT OR Apache-2.0
//! Resolution of numeric constraints from parameter metadata.
//!
//! A parameter may override its datatype's numeric envelope through metadata
//! entries `maximumValue`, `minimumValue`, `precision`, `onlyOdd`, and
//! `onlyEven`, each independently optional. Absent entries fall back to the
//! datatype's declared bounds (0 when it declares none) and to a precision
//! of 0, or 2 for floating-point datatypes.

use crate::bounds::{BoundedNumber, Parity};
use serde_json::Value;
use wirecraft_editor_blueprint::ParameterSpec;

/// Numeric envelope resolved for one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct NumericConstraints {
    /// Declared lower bound
    pub minimum: f64,
    /// Declared upper bound
    pub maximum: f64,
    /// Decimal digits to keep
    pub precision: u32,
    /// Oddness requirement, if any
    pub parity: Option<Parity>,
}

impl NumericConstraints {
    /// Resolve the envelope from parameter metadata and datatype fallbacks.
    /// `onlyOdd` wins over `onlyEven` when both are set.
    pub fn resolve(parameter: &ParameterSpec) -> Self {
        let datatype = &parameter.datatype;
        let maximum = number_entry(parameter, "maximumValue")
            .unwrap_or_else(|| datatype.max_value.unwrap_or(0.0));
        let minimum = number_entry(parameter, "minimumValue")
            .unwrap_or_else(|| datatype.min_value.unwrap_or(0.0));
        let precision = match number_entry(parameter, "precision") {
            Some(digits) => digits.max(0.0) as u32,
            None if datatype.is_float => 2,
            None => 0,
        };

        let parity = if flag_entry(parameter, "onlyOdd") {
            Some(Parity::Odd)
        } else if flag_entry(parameter, "onlyEven") {
            Some(Parity::Even)
        } else {
            None
        };

        Self {
            minimum,
            maximum,
            precision,
            parity,
        }
    }

    /// Build the value model this envelope describes
    pub fn bounded(&self, initial: f64) -> BoundedNumber {
        BoundedNumber::new(self.minimum, self.maximum, initial, self.parity, self.precision)
    }
}

fn number_entry(parameter: &ParameterSpec, name: &str) -> Option<f64> {
    parameter.metadata_value(name).and_then(Value::as_f64)
}

fn flag_entry(parameter: &ParameterSpec, name: &str) -> bool {
    match parameter.metadata_value(name) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parameter(value: serde_json::Value) -> ParameterSpec {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_metadata_overrides_datatype_bounds() {
        let parameter = parameter(json!({
            "name": "count",
            "datatype": {"typeName": "Number", "minValue": -50.0, "maxValue": 50.0},
            "defaultValue": 0,
            "metadata": [
                {"name": "minimumValue", "value": 0},
                {"name": "maximumValue", "value": 9}
            ]
        }));

        let constraints = NumericConstraints::resolve(&parameter);
        assert_eq!(constraints.minimum, 0.0);
        assert_eq!(constraints.maximum, 9.0);
    }

    #[test]
    fn test_falls_back_to_datatype_bounds_then_zero() {
        let with_bounds = parameter(json!({
            "name": "level",
            "datatype": {"typeName": "Number", "minValue": -10.0, "maxValue": 10.0},
            "defaultValue": 0
        }));
        let constraints = NumericConstraints::resolve(&with_bounds);
        assert_eq!(constraints.minimum, -10.0);
        assert_eq!(constraints.maximum, 10.0);

        let unbounded = parameter(json!({
            "name": "level",
            "datatype": {"typeName": "Number"},
            "defaultValue": 0
        }));
        let constraints = NumericConstraints::resolve(&unbounded);
        assert_eq!(constraints.minimum, 0.0);
        assert_eq!(constraints.maximum, 0.0);
    }

    #[test]
    fn test_float_datatype_defaults_to_two_digits() {
        let integral = parameter(json!({
            "name": "count",
            "datatype": {"typeName": "Number"},
            "defaultValue": 0
        }));
        assert_eq!(NumericConstraints::resolve(&integral).precision, 0);

        let floating = parameter(json!({
            "name": "ratio",
            "datatype": {"typeName": "Number", "isFloat": true},
            "defaultValue": 0.0
        }));
        assert_eq!(NumericConstraints::resolve(&floating).precision, 2);

        let explicit = parameter(json!({
            "name": "ratio",
            "datatype": {"typeName": "Number", "isFloat": true},
            "defaultValue": 0.0,
            "metadata": [{"name": "precision", "value": 4}]
        }));
        assert_eq!(NumericConstraints::resolve(&explicit).precision, 4);
    }

    #[test]
    fn test_only_odd_wins_over_only_even() {
        let parameter = parameter(json!({
            "name": "taps",
            "datatype": {"typeName": "Number"},
            "defaultValue": 1,
            "metadata": [
                {"name": "onlyEven", "value": true},
                {"name": "onlyOdd", "value": true}
            ]
        }));
        assert_eq!(NumericConstraints::resolve(&parameter).parity, Some(Parity::Odd));
    }

    #[test]
    fn test_numeric_flag_values_are_truthy() {
        let truthy = parameter(json!({
            "name": "taps",
            "datatype": {"typeName": "Number"},
            "defaultValue": 1,
            "metadata": [{"name": "onlyEven", "value": 1}]
        }));
        assert_eq!(NumericConstraints::resolve(&truthy).parity, Some(Parity::Even));

        let falsy = parameter(json!({
            "name": "taps",
            "datatype": {"typeName": "Number"},
            "defaultValue": 1,
            "metadata": [{"name": "onlyEven", "value": 0}]
        }));
        assert_eq!(NumericConstraints::resolve(&falsy).parity, None);
    }

    #[test]
    fn test_bounded_applies_the_envelope() {
        let parameter = parameter(json!({
            "name": "taps",
            "datatype": {"typeName": "Number"},
            "defaultValue": 4,
            "metadata": [
                {"name": "minimumValue", "value": 0},
                {"name": "maximumValue", "value": 10},
                {"name": "onlyOdd", "value": true}
            ]
        }));

        let model = NumericConstraints::resolve(&parameter).bounded(4.0);
        assert_eq!(model.value(), 5.0);
        assert_eq!(model.effective_maximum(), 9.0);
    }
}
