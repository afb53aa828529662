//! Individual sub-scores. Each one maps a single task attribute onto a
//! fixed scale before the strategy weights are applied.

/// Urgency used when a task has no (parseable) due date
pub const NO_DUE_DATE_URGENCY: f64 = 5.0;

const OVERDUE_BASE: f64 = 120.0;
const OVERDUE_CAP_DAYS: i64 = 30;
const IMMINENT_DAYS: i64 = 3;
const IMMINENT_BASE: f64 = 40.0;
const IMMINENT_STEP: f64 = 15.0;
const DISTANT_BASE: f64 = 30.0;
const DISTANT_DECAY: f64 = 1.5;

const IMPORTANCE_SCALE: f64 = 9.0;
const EFFORT_SCALE: f64 = 30.0;
const MIN_EFFORT_HOURS: f64 = 0.1;
const BLOCKED_TASK_POINTS: f64 = 22.0;

/// Urgency from days until due (negative = overdue).
///
/// Overdue tasks jump to 120+ (one extra point per day late, capped at 30),
/// tasks due within three days land in 40-85, and anything further out
/// decays linearly from 30 towards 0.
pub fn urgency_score(days_left: Option<i64>) -> f64 {
    match days_left {
        None => NO_DUE_DATE_URGENCY,
        Some(dl) if dl < 0 => OVERDUE_BASE + (-dl).min(OVERDUE_CAP_DAYS) as f64,
        Some(dl) if dl <= IMMINENT_DAYS => {
            IMMINENT_BASE + (IMMINENT_DAYS - dl) as f64 * IMMINENT_STEP
        }
        Some(dl) => (DISTANT_BASE - dl as f64 / DISTANT_DECAY).max(0.0),
    }
}

/// Importance clamped to 0-10, scaled to 0-90
pub fn importance_score(importance: f64) -> f64 {
    importance.clamp(0.0, 10.0) * IMPORTANCE_SCALE
}

/// Quick-win score in (0, 30]; fewer hours score higher
pub fn effort_score(hours: f64) -> f64 {
    1.0 / (1.0 + hours.max(MIN_EFFORT_HOURS)) * EFFORT_SCALE
}

pub fn dependency_score(blocked_count: usize) -> f64 {
    blocked_count as f64 * BLOCKED_TASK_POINTS
}

/// Human-readable urgency phrase for a day distance
pub fn urgency_text(days_left: Option<i64>) -> String {
    match days_left {
        None => "No due date".to_string(),
        Some(dl) if dl < 0 => {
            let days = dl.unsigned_abs();
            format!("Past due by {} day{}", days, plural(days))
        }
        Some(0) => "Due today".to_string(),
        Some(dl) => {
            let days = dl.unsigned_abs();
            format!("{} day{} left", days, plural(days))
        }
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
