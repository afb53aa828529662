use super::schema::Config;
use crate::scoring::Strategy;
use crate::task::dates::parse_date;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if Strategy::lookup(&config.strategy).is_none() {
        let known: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        errors.push(format!(
            "strategy: unknown '{}' - expected one of {}",
            config.strategy,
            known.join(", ")
        ));
    }

    if config.suggestion_limit == 0 {
        errors.push("suggestion_limit: must be at least 1".to_string());
    }

    if let Some(ref today) = config.today {
        if parse_date(today).is_none() {
            errors.push(format!("today: invalid date '{}' - expected YYYY-MM-DD", today));
        }
    }

    if config.server.port == 0 {
        errors.push("server.port: must be non-zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
