use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::report::{MatrixReport, Quadrant};
use crate::task::types::ScoredTask;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn blocks_label(count: usize) -> String {
    if count == 1 {
        "blocks 1 task".to_string()
    } else {
        format!("blocks {} tasks", count)
    }
}

/// Format ranked tasks as a table: Index, Score, Title, Urgency, Blocks.
/// No headers. Index column fits "99.", score column fits "9999.99".
pub fn format_scored_table(tasks: &[ScoredTask], use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks to rank.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 7;
    let separator = "  ";

    tasks
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded =
                format!("{:>width$}", format_score(scored.score), width = score_width);
            let urgency = &scored.explanation.urgency_text;
            let blocks = blocks_label(scored.explanation.blocks_count);

            let suffix_len = urgency.chars().count() + blocks.len() + separator.len() * 2;
            let fixed_width = index_width + 1 + score_width + separator.len() + suffix_len;

            let title = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_title(&scored.task.title, width - fixed_width)
                } else {
                    truncate_title(&scored.task.title, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.task.title.clone()
            };

            if use_colors {
                let urgency_colored = if scored.explanation.urgency_text.starts_with("Past due") {
                    urgency.red().bold().to_string()
                } else {
                    urgency.yellow().to_string()
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    title,
                    separator,
                    urgency_colored,
                    separator,
                    blocks.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, urgency, separator, blocks
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single ranked task with detailed multi-line output (for verbose mode)
pub fn format_task_detail(scored: &ScoredTask, use_colors: bool) -> String {
    let task = &scored.task;
    let explanation = &scored.explanation;
    let due = task.due_date.as_deref().unwrap_or("N/A");
    let dependencies = if task.dependencies().is_empty() {
        "none".to_string()
    } else {
        task.dependencies().join(", ")
    };

    let header = format!("{} (#{})", task.title, task.id);
    let header = if use_colors {
        header.bold().to_string()
    } else {
        header
    };

    format!(
        "{}\n  Score: {}\n  Due: {} ({})\n  Importance: {}\n  Effort: {}h\n  Blocks: {}\n  \
         Depends on: {}",
        header,
        format_score(scored.score),
        due,
        explanation.urgency_text,
        explanation.importance,
        explanation.effort_hours,
        explanation.blocks_count,
        dependencies
    )
}

/// Format ranked tasks as tab-separated values for scripting
/// Columns: score, id, title, urgency text, blocks count (no headers, no colors)
pub fn format_tsv(tasks: &[ScoredTask]) -> String {
    if tasks.is_empty() {
        return String::new();
    }

    tasks
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_score(scored.score),
                scored.task.id,
                scored.task.title,
                scored.explanation.urgency_text,
                scored.explanation.blocks_count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the Eisenhower matrix: one heading per quadrant, then its tasks.
/// Each task line shows title, id, effort and importance.
pub fn format_matrix(report: &MatrixReport, use_colors: bool) -> String {
    Quadrant::ALL
        .iter()
        .map(|&quadrant| {
            let heading = if use_colors {
                match quadrant {
                    Quadrant::DoFirst => quadrant.label().red().bold().to_string(),
                    Quadrant::Plan => quadrant.label().yellow().bold().to_string(),
                    _ => quadrant.label().bold().to_string(),
                }
            } else {
                quadrant.label().to_string()
            };

            let tasks = report.tasks(quadrant);
            let lines = if tasks.is_empty() {
                "  -".to_string()
            } else {
                tasks
                    .iter()
                    .map(|task| {
                        let id = format!("#{}", task.id);
                        let id = if use_colors { id.dimmed().to_string() } else { id };
                        format!(
                            "  {} {}  {}h, importance {}",
                            task.title,
                            id,
                            task.hours(),
                            task.importance_value()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            format!("{}\n{}", heading, lines)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the matrix as tab-separated values: quadrant, id, title
pub fn format_matrix_tsv(report: &MatrixReport) -> String {
    Quadrant::ALL
        .iter()
        .flat_map(|&quadrant| {
            report
                .tasks(quadrant)
                .iter()
                .map(move |task| format!("{}\t{}\t{}", quadrant.name(), task.id, task.title))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the cycle warning line shown above a table
pub fn format_warning(warning: &str, use_colors: bool) -> String {
    let text = format!("warning: {}", warning);
    if use_colors {
        text.yellow().bold().to_string()
    } else {
        text
    }
}
