use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub name: String,
    pub time: NaiveTime,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    pub name: String,
    pub duration_minutes: u32,
    pub calories: f64,
}

/// Everything logged on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DayLog {
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
}

/// Which activities must be present for a past day to count toward the streak.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRule {
    #[default]
    Both,
    Either,
    Workout,
    Nutrition,
}

impl CompletionRule {
    pub fn is_complete(self, activities: &DayActivities) -> bool {
        match self {
            Self::Both => activities.workout && activities.nutrition,
            Self::Either => activities.workout || activities.nutrition,
            Self::Workout => activities.workout,
            Self::Nutrition => activities.nutrition,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailyGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meals: u32,
    pub workouts: u32,
    pub meal_schedule: Vec<NaiveTime>,
    pub completion: CompletionRule,
}

impl Default for DailyGoals {
    fn default() -> Self {
        let slot = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        Self {
            calories: 3000.0,
            protein: 240.0,
            carbs: 300.0,
            fat: 100.0,
            meals: 5,
            workouts: 2,
            meal_schedule: vec![
                slot(8, 30),
                slot(10, 45),
                slot(13, 0),
                slot(16, 0),
                slot(19, 30),
            ],
            completion: CompletionRule::Both,
        }
    }
}

/// The log source payload: goals plus day logs keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogData {
    #[serde(default)]
    pub goals: DailyGoals,
    #[serde(default)]
    pub days: BTreeMap<String, DayLog>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroNutrient {
    pub current: f64,
    pub goal: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieSummary {
    pub goal: f64,
    pub consumed: f64,
    pub burned: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub completed: u32,
    pub duration: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSummary {
    pub logged: u32,
    pub remaining: u32,
    pub next_in: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionSummary {
    pub calories: CalorieSummary,
    pub protein: MacroNutrient,
    pub carbs: MacroNutrient,
    pub fat: MacroNutrient,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub summary: NutritionSummary,
    pub workouts: WorkoutSummary,
    pub meals: MealSummary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieBarWidths {
    pub consumed_width_pct: f64,
    pub burned_width_pct: f64,
}

/// Render-ready figures so the view layer does no arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DisplayFigures {
    pub calorie_bar: CalorieBarWidths,
    pub calorie_completion_pct: f64,
    pub protein_ring_deg: f64,
    pub carbs_ring_deg: f64,
    pub fat_ring_deg: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayActivities {
    pub workout: bool,
    pub nutrition: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateInfo {
    pub date: u32,
    pub day: String,
    pub is_today: bool,
    pub activities: DayActivities,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub days: Vec<DateInfo>,
    pub streak: u32,
}

/// One refresh worth of output, swapped as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySnapshot {
    pub date: String,
    pub stats: DailyStats,
    pub display: DisplayFigures,
    pub window: DateWindow,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
