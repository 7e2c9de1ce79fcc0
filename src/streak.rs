use crate::models::{DateInfo, DateWindow, DayActivities, DayLog, LogData};
use crate::stats::date_key;
use chrono::{Datelike, Duration, NaiveDate};

pub const WINDOW_RADIUS: i64 = 3;

/// `history` is oldest first; the last element is yesterday.
pub fn streak_from_history(history: &[bool]) -> u32 {
    history.iter().rev().take_while(|done| **done).count() as u32
}

pub fn day_activities(log: &DayLog, meal_target: u32) -> DayActivities {
    let logged = log.meals.len();
    DayActivities {
        workout: !log.workouts.is_empty(),
        nutrition: logged > 0 && logged >= meal_target as usize,
    }
}

pub fn build_date_window<F>(today: NaiveDate, data: &LogData, is_complete: F) -> DateWindow
where
    F: Fn(&DayActivities) -> bool,
{
    let mut days = Vec::with_capacity((WINDOW_RADIUS * 2 + 1) as usize);
    for offset in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let date = today + Duration::days(offset);
        // today and later cannot be judged yet
        let activities = if offset < 0 {
            data.days
                .get(&date_key(date))
                .map(|log| day_activities(log, data.goals.meals))
                .unwrap_or_default()
        } else {
            DayActivities::default()
        };

        days.push(DateInfo {
            date: date.day(),
            day: date.format("%a").to_string(),
            is_today: offset == 0,
            activities,
        });
    }

    let history = past_history(today, data, &is_complete);
    DateWindow {
        days,
        streak: streak_from_history(&history),
    }
}

// A day without a log ends the available history.
fn past_history<F>(today: NaiveDate, data: &LogData, is_complete: &F) -> Vec<bool>
where
    F: Fn(&DayActivities) -> bool,
{
    let mut history = Vec::new();
    let mut date = today - Duration::days(1);
    while let Some(log) = data.days.get(&date_key(date)) {
        let done = is_complete(&day_activities(log, data.goals.meals));
        history.push(done);
        if !done {
            break;
        }
        date = date - Duration::days(1);
    }
    history.reverse();
    history
}
