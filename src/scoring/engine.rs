use chrono::NaiveDate;
use std::collections::HashMap;

use super::factors::{
    dependency_score, effort_score, importance_score, urgency_score, urgency_text,
};
use super::strategy::{Strategy, Weights};
use crate::task::dates::days_left;
use crate::task::types::{Explanation, ScoredTask, Task};

/// Sub-scores for a single task before weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl SubScores {
    pub fn combine(&self, weights: &Weights) -> f64 {
        weights.urgency * self.urgency
            + weights.importance * self.importance
            + weights.effort * self.effort
            + weights.dependency * self.dependency
    }
}

/// Count, for every task id in the set, how many dependency entries name it.
/// Entries pointing outside the set are ignored.
pub fn blocked_counts(tasks: &[Task]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = tasks.iter().map(|t| (t.id.as_str(), 0)).collect();
    for task in tasks {
        for dep in task.dependencies() {
            if let Some(count) = counts.get_mut(dep.as_str()) {
                *count += 1;
            }
        }
    }
    counts
}

/// Score and rank a task set.
///
/// Every task comes back exactly once with its score (rounded to two
/// decimals) and an explanation, ordered by score descending. Ties keep
/// their input order. The input is not modified.
pub fn compute(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> Vec<ScoredTask> {
    let weights = strategy.weights();
    let blocked = blocked_counts(tasks);

    let mut results: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| {
            let mut task = task.with_defaults();
            // computed fields replace any the caller sent
            task.extra.remove("score");
            task.extra.remove("explanation");
            let dl = days_left(task.due_date.as_deref(), today);
            let blocks_count = blocked.get(task.id.as_str()).copied().unwrap_or(0);

            let subs = SubScores {
                urgency: urgency_score(dl),
                importance: importance_score(task.importance()),
                effort: effort_score(task.hours()),
                dependency: dependency_score(blocks_count),
            };

            let explanation = Explanation {
                urgency_text: urgency_text(dl),
                importance: task.importance_value(),
                effort_hours: task.hours(),
                blocks_count,
            };

            ScoredTask {
                score: round2(subs.combine(&weights)),
                explanation,
                task,
            }
        })
        .collect();

    // sort_by is stable: equal scores keep input order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!("Ranked {} tasks with {}", results.len(), strategy);
    results
}

/// Round to two decimals from the exact binary value. Scaling by 100 first
/// can push a value like 12.79499... onto the next cent.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn due_in(days: i64) -> String {
        (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    fn sample_task(id: &str, due: Option<i64>, hours: f64, importance: i64, deps: &[&str]) -> Task {
        Task {
            due_date: due.map(due_in),
            estimated_hours: Some(hours),
            importance: Some(importance.into()),
            dependencies: Some(deps.iter().map(|d| d.to_string()).collect()),
            ..Task::new(id, format!("Task {}", id))
        }
    }

    fn ids(results: &[ScoredTask]) -> Vec<&str> {
        results.iter().map(|r| r.task.id.as_str()).collect()
    }

    #[test]
    fn test_cardinality_preserved() {
        let tasks = vec![
            sample_task("a", Some(1), 2.0, 5, &[]),
            sample_task("b", None, 4.0, 3, &["a"]),
            sample_task("c", Some(-5), 1.0, 9, &["ghost"]),
        ];
        for strategy in Strategy::ALL {
            assert_eq!(compute(&tasks, strategy, today()).len(), tasks.len());
        }
        assert!(compute(&[], Strategy::SmartBalance, today()).is_empty());
    }

    #[test]
    fn test_overdue_task_ranks_first() {
        let tasks = vec![
            sample_task("future", Some(10), 2.0, 5, &[]),
            sample_task("past", Some(-2), 2.0, 5, &[]),
        ];
        let results = compute(&tasks, Strategy::SmartBalance, today());
        assert_eq!(results[0].task.id, "past");
        assert_eq!(results[0].explanation.urgency_text, "Past due by 2 days");
    }

    #[test]
    fn test_fastest_wins_prefers_low_effort() {
        let tasks = vec![
            sample_task("x", Some(10), 10.0, 8, &[]),
            sample_task("y", Some(10), 1.0, 6, &[]),
        ];
        let results = compute(&tasks, Strategy::FastestWins, today());
        assert_eq!(ids(&results), vec!["y", "x"]);
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_dependency_boost() {
        let tasks = vec![
            sample_task("1", Some(10), 3.0, 5, &[]),
            sample_task("2", Some(10), 1.0, 4, &["1"]),
            sample_task("3", Some(10), 1.0, 4, &["1"]),
        ];
        let results = compute(&tasks, Strategy::SmartBalance, today());
        let base = results.iter().find(|r| r.task.id == "1").unwrap();
        assert_eq!(base.explanation.blocks_count, 2);

        let order = ids(&results);
        let pos = |id: &str| order.iter().position(|x| *x == id).unwrap();
        assert!(pos("1") < pos("2") || pos("1") < pos("3"));
    }

    #[test]
    fn test_blocked_counts_ignore_dangling() {
        let tasks = vec![
            sample_task("a", None, 2.0, 5, &["ghost"]),
            sample_task("b", None, 2.0, 5, &["a", "ghost"]),
        ];
        let counts = blocked_counts(&tasks);
        assert_eq!(counts.get("a"), Some(&1));
        assert_eq!(counts.get("b"), Some(&0));
        assert_eq!(counts.get("ghost"), None);
    }

    #[test]
    fn test_exact_score_smart_balance() {
        // urgency 5, importance 45, effort 10, dependency 0
        // 0.30*5 + 0.38*45 + 0.17*10 = 1.5 + 17.1 + 1.7 = 20.3
        let tasks = vec![Task::new("solo", "Alone")];
        let results = compute(&tasks, Strategy::SmartBalance, today());
        assert_eq!(results[0].score, 20.3);
    }

    #[test]
    fn test_exact_score_deadline_driven_due_today() {
        // urgency 85, importance 90, effort 15, dependency 22
        // 0.70*85 + 0.15*90 + 0.05*15 + 0.10*22 = 59.5 + 13.5 + 0.75 + 2.2 = 75.95
        let tasks = vec![
            sample_task("a", Some(0), 1.0, 10, &[]),
            sample_task("b", None, 2.0, 0, &["a"]),
        ];
        let results = compute(&tasks, Strategy::DeadlineDriven, today());
        assert_eq!(results[0].task.id, "a");
        assert_eq!(results[0].score, 75.95);
        assert_eq!(results[0].explanation.urgency_text, "Due today");
    }

    #[test]
    fn test_score_rounds_from_exact_value() {
        // 0.30*5 + 0.38*9 + 0.17*7.5 + 0.15*44 lands just below 12.795
        let tasks = vec![
            sample_task("base", None, 3.0, 1, &[]),
            sample_task("d0", None, 2.0, 5, &["base"]),
            sample_task("d1", None, 2.0, 5, &["base"]),
        ];
        let results = compute(&tasks, Strategy::SmartBalance, today());
        let base = results.iter().find(|r| r.task.id == "base").unwrap();
        assert_eq!(base.score, 12.79);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.794999999999999), 12.79);
        assert_eq!(round2(75.95), 75.95);
        assert_eq!(round2(20.299999999999997), 20.3);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_defaults_applied_in_output() {
        let tasks = vec![Task::new("a", "Defaults")];
        let results = compute(&tasks, Strategy::SmartBalance, today());
        let scored = &results[0];
        assert_eq!(scored.task.importance, Some(5.into()));
        assert_eq!(scored.task.estimated_hours, Some(2.0));
        assert_eq!(scored.task.dependencies, Some(vec![]));
        assert_eq!(scored.explanation.importance, 5.into());
        assert_eq!(scored.explanation.effort_hours, 2.0);
        assert_eq!(scored.explanation.urgency_text, "No due date");
    }

    #[test]
    fn test_input_not_mutated() {
        let tasks = vec![Task::new("a", "Untouched"), Task::new("b", "Also")];
        let before = tasks.clone();
        let _ = compute(&tasks, Strategy::SmartBalance, today());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_explanation_reports_unclamped_importance() {
        let tasks = vec![
            sample_task("hi", None, 2.0, 14, &[]),
            sample_task("ten", None, 2.0, 10, &[]),
        ];
        let results = compute(&tasks, Strategy::HighImpact, today());
        let hi = results.iter().find(|r| r.task.id == "hi").unwrap();
        let ten = results.iter().find(|r| r.task.id == "ten").unwrap();
        assert_eq!(hi.explanation.importance, 14.into());
        assert_eq!(hi.score, ten.score);
    }

    #[test]
    fn test_fractional_importance_scored() {
        // 0.12*5 + 0.70*67.5 + 0.06*10 = 0.6 + 47.25 + 0.6 = 48.45
        let json = serde_json::json!({"id": "a", "title": "Half", "importance": 7.5});
        let task: Task = serde_json::from_value(json).unwrap();
        let results = compute(&[task], Strategy::HighImpact, today());
        assert_eq!(results[0].score, 48.45);
        assert_eq!(results[0].explanation.importance.as_f64(), Some(7.5));
    }

    #[test]
    fn test_malformed_due_date_treated_as_missing() {
        let mut bad = Task::new("bad", "Bad date");
        bad.due_date = Some("next week".to_string());
        let none = Task::new("none", "No date");

        let results = compute(&[bad, none], Strategy::SmartBalance, today());
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].explanation.urgency_text, "No due date");
        // malformed value is echoed back as given
        assert_eq!(results[0].task.due_date.as_deref(), Some("next week"));
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let tasks: Vec<Task> = ["c", "a", "d", "b"]
            .iter()
            .map(|id| Task::new(*id, "Same"))
            .collect();
        let results = compute(&tasks, Strategy::SmartBalance, today());
        assert_eq!(ids(&results), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_idempotent_for_fixed_date() {
        let tasks = vec![
            sample_task("a", Some(2), 5.0, 3, &["c"]),
            sample_task("b", Some(-1), 0.5, 8, &[]),
            sample_task("c", None, 1.0, 6, &[]),
        ];
        let first = compute(&tasks, Strategy::SmartBalance, today());
        let second = compute(&tasks, Strategy::SmartBalance, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_caller_score_field_replaced() {
        let mut task = Task::new("a", "Sneaky");
        task.extra.insert("score".to_string(), serde_json::json!(999));
        task.extra.insert("owner".to_string(), serde_json::json!("sam"));

        let results = compute(&[task], Strategy::SmartBalance, today());
        assert!(!results[0].task.extra.contains_key("score"));
        assert!(results[0].task.extra.contains_key("owner"));
        assert_eq!(results[0].score, 20.3);
    }

    #[test]
    fn test_sub_scores_combine() {
        let subs = SubScores {
            urgency: 10.0,
            importance: 20.0,
            effort: 30.0,
            dependency: 40.0,
        };
        let weights = Weights {
            urgency: 0.1,
            importance: 0.2,
            effort: 0.3,
            dependency: 0.4,
        };
        assert!((subs.combine(&weights) - 30.0).abs() < 1e-9);
    }
}
