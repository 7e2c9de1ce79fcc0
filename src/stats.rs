use crate::models::{
    CalorieSummary, DailyStats, DayLog, DaySnapshot, DisplayFigures, LogData, MealSummary,
    NutritionSummary, WorkoutSummary,
};
use crate::progress::{
    calorie_bar_widths, completion_ratio, macro_nutrient, ring_rotation_degrees,
};
use crate::streak::build_date_window;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub const NO_UPCOMING_MEAL: &str = "none";

pub fn build_stats(data: &LogData) -> DailyStats {
    build_stats_at(Local::now().naive_local(), data)
}

/// Aggregates the log for `now`'s calendar day. Days without a log count as empty.
pub fn build_stats_at(now: NaiveDateTime, data: &LogData) -> DailyStats {
    let goals = &data.goals;
    let empty = DayLog::default();
    let day = data.days.get(&date_key(now.date())).unwrap_or(&empty);

    let consumed: f64 = day.meals.iter().map(|meal| meal.calories).sum();
    let burned: f64 = day.workouts.iter().map(|workout| workout.calories).sum();
    let protein: f64 = day.meals.iter().map(|meal| meal.protein).sum();
    let carbs: f64 = day.meals.iter().map(|meal| meal.carbs).sum();
    let fat: f64 = day.meals.iter().map(|meal| meal.fat).sum();

    let completed = day.workouts.len() as u32;
    let duration = day
        .workouts
        .iter()
        .fold(0u32, |total, workout| total.saturating_add(workout.duration_minutes));

    let logged = day.meals.len() as u32;
    let meals_remaining = goals.meals.saturating_sub(logged);

    DailyStats {
        summary: NutritionSummary {
            calories: CalorieSummary {
                goal: goals.calories,
                consumed,
                burned,
                net: consumed - burned,
            },
            protein: macro_nutrient(protein, goals.protein),
            carbs: macro_nutrient(carbs, goals.carbs),
            fat: macro_nutrient(fat, goals.fat),
        },
        workouts: WorkoutSummary {
            completed,
            duration,
            remaining: goals.workouts.saturating_sub(completed),
        },
        meals: MealSummary {
            logged,
            remaining: meals_remaining,
            next_in: next_meal_label(now.time(), &goals.meal_schedule, meals_remaining),
        },
    }
}

pub fn display_figures(stats: &DailyStats) -> DisplayFigures {
    let calories = &stats.summary.calories;
    DisplayFigures {
        calorie_bar: calorie_bar_widths(calories.consumed, calories.burned, calories.goal),
        calorie_completion_pct: completion_ratio(calories.consumed, calories.goal) * 100.0,
        protein_ring_deg: ring_rotation_degrees(stats.summary.protein.percentage),
        carbs_ring_deg: ring_rotation_degrees(stats.summary.carbs.percentage),
        fat_ring_deg: ring_rotation_degrees(stats.summary.fat.percentage),
    }
}

pub fn build_snapshot(data: &LogData) -> DaySnapshot {
    build_snapshot_at(Local::now().naive_local(), data)
}

pub fn build_snapshot_at(now: NaiveDateTime, data: &LogData) -> DaySnapshot {
    let stats = build_stats_at(now, data);
    let display = display_figures(&stats);
    let rule = data.goals.completion;
    let window = build_date_window(now.date(), data, |activities| rule.is_complete(activities));

    DaySnapshot {
        date: date_key(now.date()),
        stats,
        display,
        window,
    }
}

/// Time until the next scheduled meal slot later today.
pub fn next_meal_label(now: NaiveTime, schedule: &[NaiveTime], remaining: u32) -> String {
    if remaining == 0 {
        return NO_UPCOMING_MEAL.to_string();
    }

    match schedule.iter().filter(|slot| **slot > now).min() {
        Some(slot) => {
            let seconds = (*slot - now).num_seconds();
            duration_label((seconds + 59) / 60)
        }
        None => NO_UPCOMING_MEAL.to_string(),
    }
}

pub fn duration_label(minutes: i64) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealEntry, WorkoutEntry};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn meal(name: &str, clock: NaiveTime, calories: f64, macros: (f64, f64, f64)) -> MealEntry {
        MealEntry {
            name: name.into(),
            time: clock,
            calories,
            protein: macros.0,
            carbs: macros.1,
            fat: macros.2,
        }
    }

    fn sample_data() -> LogData {
        let mut data = LogData::default();
        data.days.insert(
            "2026-01-05".into(),
            DayLog {
                meals: vec![
                    meal("Breakfast", time(8, 30), 450.0, (30.0, 60.0, 15.0)),
                    meal("Morning Snack", time(10, 45), 180.0, (10.0, 20.0, 7.0)),
                    meal("Lunch", time(13, 0), 801.0, (45.0, 82.0, 35.0)),
                ],
                workouts: vec![
                    WorkoutEntry {
                        name: "Upper Body Strength".into(),
                        duration_minutes: 45,
                        calories: 320.0,
                    },
                    WorkoutEntry {
                        name: "HIIT Cardio".into(),
                        duration_minutes: 30,
                        calories: 400.0,
                    },
                ],
            },
        );
        data
    }

    #[test]
    fn stats_sum_meals_and_workouts() {
        let stats = build_stats_at(at(14, 0), &sample_data());
        let calories = stats.summary.calories;
        assert_eq!(calories.goal, 3000.0);
        assert_eq!(calories.consumed, 1431.0);
        assert_eq!(calories.burned, 720.0);
        assert_eq!(calories.net, 711.0);

        assert_eq!(stats.summary.protein.current, 85.0);
        assert_eq!(stats.summary.carbs.current, 162.0);
        assert_eq!(stats.summary.fat.current, 57.0);
        assert!((stats.summary.fat.percentage - 0.57).abs() < 1e-9);

        assert_eq!(
            stats.workouts,
            WorkoutSummary { completed: 2, duration: 75, remaining: 0 }
        );
        assert_eq!(stats.meals.logged, 3);
        assert_eq!(stats.meals.remaining, 2);
        assert_eq!(stats.meals.next_in, "2h");
    }

    #[test]
    fn stats_for_unlogged_day_are_empty() {
        let stats = build_stats_at(at(7, 0), &LogData::default());
        assert_eq!(stats.summary.calories.consumed, 0.0);
        assert_eq!(stats.summary.calories.net, 0.0);
        assert_eq!(stats.summary.protein.percentage, 0.0);
        assert_eq!(stats.workouts.remaining, 2);
        assert_eq!(stats.meals.remaining, 5);
        assert_eq!(stats.meals.next_in, "1h 30m");
    }

    #[test]
    fn net_can_go_negative() {
        let mut data = sample_data();
        let day = data.days.get_mut("2026-01-05").unwrap();
        day.meals.truncate(1);
        let stats = build_stats_at(at(14, 0), &data);
        assert_eq!(stats.summary.calories.net, 450.0 - 720.0);
    }

    #[test]
    fn zero_goals_do_not_divide_by_zero() {
        let mut data = sample_data();
        data.goals.calories = 0.0;
        data.goals.protein = 0.0;
        data.goals.meals = 0;
        data.goals.workouts = 0;
        let stats = build_stats_at(at(14, 0), &data);
        let display = display_figures(&stats);
        assert_eq!(stats.summary.protein.percentage, 0.0);
        assert_eq!(display.calorie_bar.consumed_width_pct, 0.0);
        assert_eq!(display.calorie_completion_pct, 0.0);
        assert_eq!(stats.meals.remaining, 0);
        assert_eq!(stats.workouts.remaining, 0);
        assert_eq!(stats.meals.next_in, NO_UPCOMING_MEAL);
    }

    #[test]
    fn display_figures_follow_stats() {
        let stats = build_stats_at(at(14, 0), &sample_data());
        let display = display_figures(&stats);
        assert!((display.calorie_completion_pct - 47.7).abs() < 1e-9);
        assert!((display.calorie_bar.consumed_width_pct - 47.7).abs() < 1e-9);
        assert!((display.calorie_bar.burned_width_pct - 24.0).abs() < 1e-9);
        assert!((display.fat_ring_deg - 205.2).abs() < 1e-9);
        assert!((display.carbs_ring_deg - 194.4).abs() < 1e-9);
    }

    #[test]
    fn snapshot_is_consistent() {
        let snapshot = build_snapshot_at(at(14, 0), &sample_data());
        assert_eq!(snapshot.date, "2026-01-05");
        assert_eq!(snapshot.display, display_figures(&snapshot.stats));
        assert_eq!(snapshot.window.days.len(), 7);
        assert!(snapshot.window.days[3].is_today);
        assert_eq!(snapshot.window.streak, 0);
    }

    #[test]
    fn snapshot_is_deterministic() {
        let data = sample_data();
        assert_eq!(
            build_snapshot_at(at(9, 15), &data),
            build_snapshot_at(at(9, 15), &data)
        );
    }

    #[test]
    fn next_meal_picks_first_slot_after_now() {
        let schedule = [time(19, 30), time(8, 30), time(13, 0)];
        assert_eq!(next_meal_label(time(9, 0), &schedule, 3), "4h");
        assert_eq!(next_meal_label(time(12, 15), &schedule, 3), "45m");
        assert_eq!(next_meal_label(time(13, 0), &schedule, 3), "6h 30m");
        assert_eq!(next_meal_label(time(20, 0), &schedule, 3), NO_UPCOMING_MEAL);
        assert_eq!(next_meal_label(time(9, 0), &[], 3), NO_UPCOMING_MEAL);
    }

    #[test]
    fn next_meal_rounds_partial_minutes_up() {
        let now = NaiveTime::from_hms_opt(12, 59, 30).unwrap();
        assert_eq!(next_meal_label(now, &[time(13, 0)], 1), "1m");
    }

    #[test]
    fn duration_labels() {
        assert_eq!(duration_label(0), "0m");
        assert_eq!(duration_label(45), "45m");
        assert_eq!(duration_label(60), "1h");
        assert_eq!(duration_label(150), "2h 30m");
    }
}
