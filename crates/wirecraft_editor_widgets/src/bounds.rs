// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bounded numeric value model.
//!
//! Holds a number under three constraints applied on every mutation, in
//! order: parity (nudge up by one when the requested value has the wrong
//! oddness), precision (round to a fixed number of decimal digits), and
//! range (clamp to the effective bounds). The effective bounds are computed
//! once at construction: each declared bound is rounded to the precision,
//! then nudged inward by one unit if it violates the parity constraint, so
//! the bounds themselves always satisfy every invariant the value must.
//!
//! The model assumes finite input; non-finite numbers are rejected at the
//! text-entry boundary before they can reach it.

/// Oddness constraint on a numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Value must be odd
    Odd,
    /// Value must be even
    Even,
}

/// A numeric value constrained by range, precision, and parity
#[derive(Debug, Clone)]
pub struct BoundedNumber {
    minimum: f64,
    maximum: f64,
    value: f64,
    parity: Option<Parity>,
    precision: u32,
    limit_min: f64,
    limit_max: f64,
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

impl BoundedNumber {
    /// Create the model and settle the initial value through the constraint
    /// pipeline
    pub fn new(
        minimum: f64,
        maximum: f64,
        initial: f64,
        parity: Option<Parity>,
        precision: u32,
    ) -> Self {
        let mut model = Self {
            minimum,
            maximum,
            value: 0.0,
            parity,
            precision,
            limit_min: 0.0,
            limit_max: 0.0,
        };
        model.limit_min = model.adjust_bound(round_to(minimum, precision), 1.0);
        model.limit_max = model.adjust_bound(round_to(maximum, precision), -1.0);
        model.set_value(initial);
        model
    }

    fn violates_parity(&self, value: f64) -> bool {
        match self.parity {
            Some(Parity::Odd) => value % 2.0 == 0.0,
            Some(Parity::Even) => value % 2.0 != 0.0,
            None => false,
        }
    }

    fn adjust_bound(&self, bound: f64, nudge: f64) -> f64 {
        if self.violates_parity(bound) {
            bound + nudge
        } else {
            bound
        }
    }

    /// Set the value, applying parity, precision, and range in that order
    pub fn set_value(&mut self, new_value: f64) {
        let mut value = new_value;
        if self.violates_parity(value) {
            value += 1.0;
        }
        value = round_to(value, self.precision);
        self.value = value.max(self.limit_min).min(self.limit_max);
    }

    /// Shift the value up by `amount`
    pub fn increment_by(&mut self, amount: f64) {
        self.set_value(self.value + amount);
    }

    /// Shift the value down by `amount`
    pub fn decrement_by(&mut self, amount: f64) {
        self.set_value(self.value - amount);
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of decimal digits the value is kept at
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Declared minimum, before parity adjustment
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Declared maximum, before parity adjustment
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Lower clamp bound actually in force
    pub fn effective_minimum(&self) -> f64 {
        self.limit_min
    }

    /// Upper clamp bound actually in force
    pub fn effective_maximum(&self) -> f64 {
        self.limit_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_parity_pulls_bounds_inward() {
        let model = BoundedNumber::new(0.0, 10.0, 5.0, Some(Parity::Odd), 0);
        assert_eq!(model.effective_minimum(), 1.0);
        assert_eq!(model.effective_maximum(), 9.0);
        assert_eq!(model.minimum(), 0.0);
        assert_eq!(model.maximum(), 10.0);
    }

    #[test]
    fn test_even_bounds_stay_put_under_even_parity() {
        let model = BoundedNumber::new(0.0, 10.0, 4.0, Some(Parity::Even), 0);
        assert_eq!(model.effective_minimum(), 0.0);
        assert_eq!(model.effective_maximum(), 10.0);
    }

    #[test]
    fn test_even_value_is_nudged_up_to_odd() {
        let mut model = BoundedNumber::new(0.0, 10.0, 5.0, Some(Parity::Odd), 0);
        model.set_value(4.0);
        assert_eq!(model.value(), 5.0);
    }

    #[test]
    fn test_out_of_range_value_clamps_to_effective_bound() {
        let mut model = BoundedNumber::new(0.0, 10.0, 5.0, Some(Parity::Odd), 0);
        model.set_value(10.0);
        assert_eq!(model.value(), 9.0);
        model.set_value(-3.0);
        assert_eq!(model.value(), 1.0);
    }

    #[test]
    fn test_precision_rounds_before_clamping() {
        let mut model = BoundedNumber::new(0.0, 10.0, 0.0, None, 2);
        model.set_value(1.2345);
        assert_eq!(model.value(), 1.23);
        model.set_value(1.239);
        assert_eq!(model.value(), 1.24);
    }

    #[test]
    fn test_fractional_bounds_are_rounded_to_precision() {
        let model = BoundedNumber::new(0.124, 9.876, 0.0, None, 1);
        assert_eq!(model.effective_minimum(), 0.1);
        assert_eq!(model.effective_maximum(), 9.9);
        assert_eq!(model.value(), 0.1);
    }

    #[test]
    fn test_increment_and_decrement_settle_constraints() {
        let mut model = BoundedNumber::new(0.0, 10.0, 5.0, Some(Parity::Odd), 0);
        model.increment_by(1.0);
        // 6 violates odd, nudged to 7
        assert_eq!(model.value(), 7.0);
        model.decrement_by(10.0);
        assert_eq!(model.value(), 1.0);
        model.increment_by(100.0);
        assert_eq!(model.value(), 9.0);
    }

    #[test]
    fn test_initial_value_is_settled_at_construction() {
        let model = BoundedNumber::new(0.0, 8.0, 11.5, Some(Parity::Even), 0);
        // 11.5 violates even, nudged to 12.5, rounded, clamped to 8
        assert_eq!(model.value(), 8.0);
    }

    #[test]
    fn test_unconstrained_value_round_trips() {
        let mut model = BoundedNumber::new(-100.0, 100.0, 0.0, None, 0);
        model.set_value(42.0);
        assert_eq!(model.value(), 42.0);
    }
}
