//! StatValue - The base/percent/flat container for HP, ATK and DEF

use serde::{Deserialize, Serialize};

/// A stat that scales off a base value
///
/// Final value is `base × (1 + percent) + flat`:
/// - `base`: character base (plus weapon base for ATK)
/// - `percent`: sum of all percent-of-base bonuses (0.466 = 46.6%)
/// - `flat`: sum of all flat additions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub base: f64,
    pub percent: f64,
    pub flat: f64,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            percent: 0.0,
            flat: 0.0,
        }
    }

    /// Calculate final value: base × (1 + percent) + flat
    pub fn compute(&self) -> f64 {
        self.base * (1.0 + self.percent) + self.flat
    }

    pub fn add_base(&mut self, value: f64) {
        self.base += value;
    }

    pub fn add_percent(&mut self, value: f64) {
        self.percent += value;
    }

    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stat = StatValue::with_base(100.0);
        assert!((stat.compute() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_is_not_scaled_by_percent() {
        let mut stat = StatValue::with_base(500.0);
        stat.add_percent(0.466);
        stat.add_flat(311.0);
        // 500 * 1.466 + 311 = 1044
        assert!((stat.compute() - 1044.0).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_percent_stack_additively() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_percent(0.20);
        stat.add_percent(0.30);
        // 100 * (1 + 0.50) = 150, not 100 * 1.2 * 1.3 = 156
        assert!((stat.compute() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_adjustment_is_scaled() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_percent(0.5);
        stat.add_base(20.0);
        assert!((stat.compute() - 180.0).abs() < 1e-9);
    }
}
