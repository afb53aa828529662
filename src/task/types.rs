use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const DEFAULT_IMPORTANCE: i64 = 5;
pub const DEFAULT_ESTIMATED_HOURS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>, // "YYYY-MM-DD", anything else means no due date
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<Number>, // 0-10, fractions allowed, clamped when scoring
    #[serde(default)]
    pub dependencies: Option<Vec<String>>, // ids of tasks this one waits on

    /// Fields the ranking does not use, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_hours: None,
            importance: None,
            dependencies: None,
            extra: Map::new(),
        }
    }

    /// Copy of this task with every optional scoring field filled in
    pub fn with_defaults(&self) -> Task {
        Task {
            estimated_hours: Some(self.hours()),
            importance: Some(self.importance_value()),
            dependencies: Some(self.dependencies().to_vec()),
            ..self.clone()
        }
    }

    pub fn importance(&self) -> f64 {
        self.importance
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(DEFAULT_IMPORTANCE as f64)
    }

    /// Importance as the caller wrote it (7 stays 7, 7.5 stays 7.5)
    pub fn importance_value(&self) -> Number {
        self.importance
            .clone()
            .unwrap_or_else(|| Number::from(DEFAULT_IMPORTANCE))
    }

    pub fn hours(&self) -> f64 {
        self.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS)
    }

    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or(&[])
    }
}

/// Why a task landed where it did
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Explanation {
    pub urgency_text: String,
    pub importance: Number,
    pub effort_hours: f64,
    pub blocks_count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub score: f64,
    pub explanation: Explanation,
}
