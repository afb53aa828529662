use anyhow::{bail, Context, Result};
use serde_json::Value;

use super::types::Task;

/// A decoded ranking request: the task set plus the strategy it asked for
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRequest {
    pub tasks: Vec<Task>,
    pub strategy: Option<String>,
}

/// Decode a request body.
///
/// Accepts either a bare JSON array of tasks or an object of the form
/// `{"tasks": [...], "strategy": "..."}`. Every task must carry `id` and
/// `title`; the remaining fields are optional.
pub fn parse_payload(payload: Value) -> Result<TaskRequest> {
    let (tasks, strategy) = match payload {
        Value::Object(mut obj) if obj.contains_key("tasks") => {
            let strategy = obj
                .get("strategy")
                .and_then(Value::as_str)
                .map(str::to_string);
            (obj.remove("tasks").unwrap_or(Value::Null), strategy)
        }
        Value::Array(_) => (payload, None),
        _ => bail!("Send a JSON array, or an object with 'tasks' key"),
    };

    let Value::Array(items) = tasks else {
        bail!("'tasks' must be a list");
    };

    let tasks = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| parse_task(i, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(TaskRequest { tasks, strategy })
}

fn parse_task(index: usize, item: Value) -> Result<Task> {
    let has_required = item
        .as_object()
        .is_some_and(|obj| obj.contains_key("id") && obj.contains_key("title"));
    if !has_required {
        bail!("Task at index {} missing 'id' or 'title'", index);
    }

    serde_json::from_value(item).with_context(|| format!("Task at index {} is malformed", index))
}

/// Decode raw request bytes. An empty body decodes as JSON `null`.
pub fn parse_payload_bytes(body: &[u8]) -> Result<TaskRequest> {
    let payload: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(body).context("Invalid JSON")?
    };
    parse_payload(payload)
}
