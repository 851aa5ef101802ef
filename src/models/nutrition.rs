// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily macro progress and meal logging.
//!
//! Progress is tracked per directory user for the lifetime of the process.
//! Intake accumulates the real totals; only the completion percentage is
//! capped at 100.

use super::Macros;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Targets used when the user has no macros assigned by a trainer.
pub const DEFAULT_TARGETS: Macros = Macros {
    calories: 2000,
    protein: 150,
    carbs: 250,
    fats: 70,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Gauge {
    pub target: u32,
    pub current: u32,
}

impl Gauge {
    pub fn empty(target: u32) -> Self {
        Self { target, current: 0 }
    }

    fn add(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount);
    }

    /// Completion in percent, capped at 100.
    pub fn percentage(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (f64::from(self.current) / f64::from(self.target) * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MacroProgress {
    pub calories: Gauge,
    pub protein: Gauge,
    pub carbs: Gauge,
    pub fats: Gauge,
}

impl MacroProgress {
    /// Fresh progress for the given targets (or the defaults).
    pub fn for_targets(targets: Option<Macros>) -> Self {
        let t = targets.unwrap_or(DEFAULT_TARGETS);
        Self {
            calories: Gauge::empty(t.calories),
            protein: Gauge::empty(t.protein),
            carbs: Gauge::empty(t.carbs),
            fats: Gauge::empty(t.fats),
        }
    }

    /// Keep the logged intake but measure it against new targets.
    pub fn retarget(&mut self, targets: Option<Macros>) {
        let t = targets.unwrap_or(DEFAULT_TARGETS);
        self.calories.target = t.calories;
        self.protein.target = t.protein;
        self.carbs.target = t.carbs;
        self.fats.target = t.fats;
    }

    pub fn log(&mut self, meal: &Meal) {
        self.calories.add(meal.calories);
        self.protein.add(meal.protein);
        self.carbs.add(meal.carbs);
        self.fats.add(meal.fats);
    }
}

/// A meal entered on the nutrition screen. Missing amounts count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default)]
pub struct Meal {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_real_totals() {
        let mut progress = MacroProgress::for_targets(None);
        progress.log(&Meal {
            calories: 3000,
            protein: 40,
            ..Default::default()
        });

        assert_eq!(progress.calories.current, 3000);
        assert_eq!(progress.calories.target, 2000);
        assert_eq!(progress.protein.current, 40);
        assert_eq!(progress.carbs.current, 0);
        assert_eq!(progress.calories.percentage(), 100.0);
        assert_eq!(progress.protein.percentage(), 40.0 / 150.0 * 100.0);
    }

    #[test]
    fn test_zero_target_is_complete() {
        assert_eq!(Gauge::empty(0).percentage(), 100.0);
    }

    #[test]
    fn test_meal_fields_default_to_zero() {
        let meal: Meal = serde_json::from_str(r#"{"protein": 30}"#).unwrap();
        assert_eq!(
            meal,
            Meal {
                protein: 30,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_retarget_keeps_intake() {
        let mut progress = MacroProgress::for_targets(None);
        progress.log(&Meal {
            calories: 500,
            ..Default::default()
        });
        progress.retarget(Some(Macros {
            calories: 1000,
            protein: 100,
            carbs: 100,
            fats: 30,
        }));
        assert_eq!(progress.calories.current, 500);
        assert_eq!(progress.calories.target, 1000);
        assert_eq!(progress.calories.percentage(), 50.0);
    }

    #[test]
    fn test_custom_targets() {
        let targets = Macros {
            calories: 2200,
            protein: 160,
            carbs: 260,
            fats: 70,
        };
        let progress = MacroProgress::for_targets(Some(targets));
        assert_eq!(progress.carbs.target, 260);
        assert_eq!(progress.fats.target, 70);
    }
}
