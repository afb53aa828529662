pub mod dates;
pub mod payload;
pub mod types;

pub use dates::{days_left, parse_date, today_local};
pub use payload::{parse_payload, parse_payload_bytes, TaskRequest};
pub use types::{Explanation, ScoredTask, Task};
