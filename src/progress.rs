use crate::models::{CalorieBarWidths, MacroNutrient};

pub fn completion_ratio(current: f64, goal: f64) -> f64 {
    if goal.is_nan() || goal <= 0.0 {
        return 0.0;
    }
    (current / goal).max(0.0).min(1.0)
}

pub fn macro_nutrient(current: f64, goal: f64) -> MacroNutrient {
    MacroNutrient {
        current,
        goal,
        percentage: completion_ratio(current, goal),
    }
}

// Bars sit at opposite ends of one track and may overlap.
pub fn calorie_bar_widths(consumed: f64, burned: f64, goal: f64) -> CalorieBarWidths {
    CalorieBarWidths {
        consumed_width_pct: bar_width_pct(consumed, goal),
        burned_width_pct: bar_width_pct(burned, goal),
    }
}

fn bar_width_pct(value: f64, goal: f64) -> f64 {
    if goal.is_nan() || goal <= 0.0 {
        return 0.0;
    }
    (value / goal * 100.0).max(0.0).min(100.0)
}

// Unclamped; the renderer clips over-goal turns.
pub fn ring_rotation_degrees(progress: f64) -> f64 {
    progress * 360.0
}
