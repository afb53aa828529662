use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::path::Path;

/// Save a report as pretty JSON atomically
///
/// Uses atomic-write-file so a reader never sees a half-written file.
pub fn save_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    tracing::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::analyze;
    use crate::scoring::Strategy;
    use crate::task::types::Task;
    use chrono::NaiveDate;
    use std::env;

    #[test]
    fn test_save_report_writes_json() {
        let temp_path = env::temp_dir().join("task_rank_test_report.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut blocked = Task::new("2", "Second");
        blocked.dependencies = Some(vec!["1".to_string()]);
        let tasks = vec![Task::new("1", "First"), blocked];
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let report = analyze(&tasks, Strategy::SmartBalance, today);

        save_report(&temp_path, &report).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["results"][0]["id"], "1");
        assert_eq!(value["results"][0]["explanation"]["blocks_count"], 1);

        let _ = std::fs::remove_file(&temp_path);
    }
}
