use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::{compute, has_cycle, Strategy};
use crate::task::dates::days_left;
use crate::task::types::{ScoredTask, Task};

pub const CYCLE_WARNING: &str = "circular_dependencies_detected";

/// Due within this many days (or overdue) counts as urgent
pub const URGENT_WITHIN_DAYS: i64 = 3;
/// Importance at or above this counts as important
pub const IMPORTANT_FROM: f64 = 7.0;

/// Full ranking with an optional warning about the dependency graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeReport {
    pub results: Vec<ScoredTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The top of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestReport {
    pub suggestions: Vec<ScoredTask>,
}

/// Rank every task and flag circular dependencies
pub fn analyze(tasks: &[Task], strategy: Strategy, today: NaiveDate) -> AnalyzeReport {
    let warning = if has_cycle(tasks) {
        tracing::info!("Circular dependencies among {} tasks", tasks.len());
        Some(CYCLE_WARNING.to_string())
    } else {
        None
    };

    AnalyzeReport {
        results: compute(tasks, strategy, today),
        warning,
    }
}

/// Rank every task and keep the first `limit`
pub fn suggest(
    tasks: &[Task],
    strategy: Strategy,
    today: NaiveDate,
    limit: usize,
) -> SuggestReport {
    let mut suggestions = compute(tasks, strategy, today);
    suggestions.truncate(limit);
    SuggestReport { suggestions }
}

/// Eisenhower matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    DoFirst,
    Plan,
    Delegate,
    Eliminate,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Plan,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// Key used in JSON and TSV output
    pub fn name(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "do_first",
            Quadrant::Plan => "plan",
            Quadrant::Delegate => "delegate",
            Quadrant::Eliminate => "eliminate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Urgent & Important (Do first)",
            Quadrant::Plan => "Not Urgent & Important (Plan)",
            Quadrant::Delegate => "Urgent & Not Important (Delegate)",
            Quadrant::Eliminate => "Not Urgent & Not Important (Eliminate)",
        }
    }
}

/// Tasks split into the four quadrants, each in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub do_first: Vec<Task>,
    pub plan: Vec<Task>,
    pub delegate: Vec<Task>,
    pub eliminate: Vec<Task>,
}

impl MatrixReport {
    pub fn tasks(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::DoFirst => &self.do_first,
            Quadrant::Plan => &self.plan,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Eliminate => &self.eliminate,
        }
    }

    fn tasks_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Task> {
        match quadrant {
            Quadrant::DoFirst => &mut self.do_first,
            Quadrant::Plan => &mut self.plan,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Eliminate => &mut self.eliminate,
        }
    }
}

/// Overdue or due within three days. No (parseable) due date is never urgent.
pub fn is_urgent(task: &Task, today: NaiveDate) -> bool {
    matches!(days_left(task.due_date.as_deref(), today), Some(dl) if dl <= URGENT_WITHIN_DAYS)
}

pub fn is_important(task: &Task) -> bool {
    task.importance() >= IMPORTANT_FROM
}

pub fn quadrant(task: &Task, today: NaiveDate) -> Quadrant {
    match (is_urgent(task, today), is_important(task)) {
        (true, true) => Quadrant::DoFirst,
        (false, true) => Quadrant::Plan,
        (true, false) => Quadrant::Delegate,
        (false, false) => Quadrant::Eliminate,
    }
}

/// Sort every task into its Eisenhower quadrant. Tasks are echoed with
/// defaults filled in; no scoring happens here.
pub fn matrix(tasks: &[Task], today: NaiveDate) -> MatrixReport {
    let mut report = MatrixReport::default();
    for task in tasks {
        report.tasks_mut(quadrant(task, today)).push(task.with_defaults());
    }
    tracing::debug!(
        "Matrix: {} do first, {} plan, {} delegate, {} eliminate",
        report.do_first.len(),
        report.plan.len(),
        report.delegate.len(),
        report.eliminate.len()
    );
    report
}
