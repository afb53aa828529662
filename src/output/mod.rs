pub mod export;
pub mod formatter;

pub use export::save_report;
pub use formatter::{
    format_matrix, format_matrix_tsv, format_score, format_scored_table, format_task_detail,
    format_tsv, format_warning, should_use_colors,
};
