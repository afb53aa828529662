use serde::{Deserialize, Serialize};
use std::fmt;

/// Weights applied to the four sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

/// Named ranking strategy.
///
/// Each strategy is a fixed weighting of urgency, importance, effort and
/// dependency fan-in. Unknown names resolve to [`Strategy::SmartBalance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    /// Exact lookup by name
    pub fn lookup(name: &str) -> Option<Strategy> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lookup by name, falling back to the default strategy
    pub fn resolve(name: &str) -> Strategy {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::debug!("Unknown strategy '{}', using {}", name, Strategy::default());
            Strategy::default()
        })
    }

    pub fn weights(self) -> Weights {
        let (urgency, importance, effort, dependency) = match self {
            Strategy::SmartBalance => (0.30, 0.38, 0.17, 0.15),
            Strategy::FastestWins => (0.10, 0.20, 0.60, 0.10),
            Strategy::HighImpact => (0.12, 0.70, 0.06, 0.12),
            Strategy::DeadlineDriven => (0.70, 0.15, 0.05, 0.10),
        };
        Weights {
            urgency,
            importance,
            effort,
            dependency,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
