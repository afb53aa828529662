use std::collections::HashMap;

use crate::task::types::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Check whether the tasks' dependency graph contains a directed cycle.
///
/// Dependencies naming ids outside the task set are dropped before the
/// walk. A task that depends on itself is a cycle. When ids repeat, the
/// last task with that id supplies the edges.
pub fn has_cycle(tasks: &[Task]) -> bool {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        graph.insert(task.id.as_str(), Vec::new());
    }
    for task in tasks {
        let edges = task
            .dependencies()
            .iter()
            .map(String::as_str)
            .filter(|dep| graph.contains_key(dep))
            .collect();
        graph.insert(task.id.as_str(), edges);
    }

    let mut state: HashMap<&str, VisitState> = HashMap::with_capacity(graph.len());
    // (node, index of the next edge to follow)
    let mut stack: Vec<(&str, usize)> = Vec::new();

    for task in tasks {
        let root = task.id.as_str();
        if state.contains_key(root) {
            continue;
        }
        state.insert(root, VisitState::InProgress);
        stack.push((root, 0));

        while let Some((node, next)) = stack.last_mut() {
            let edges = &graph[*node];
            if let Some(&dep) = edges.get(*next) {
                *next += 1;
                match state.get(dep).copied() {
                    Some(VisitState::InProgress) => {
                        tracing::debug!("Dependency cycle through '{}' -> '{}'", node, dep);
                        return true;
                    }
                    Some(VisitState::Done) => {}
                    None => {
                        state.insert(dep, VisitState::InProgress);
                        stack.push((dep, 0));
                    }
                }
            } else {
                state.insert(*node, VisitState::Done);
                stack.pop();
            }
        }
    }

    false
}
