//! Compact suggestion rules.

use std::fmt;

/// Count at which escalated reminders start.
const ESCALATION_START: u64 = 50;

/// Spacing of reminders after the threshold.
const INTERVAL: u64 = 10;

/// Spacing of escalated reminders.
const ESCALATION_INTERVAL: u64 = 25;

/// A suggestion emitted for a given tool-call count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// Count reached the threshold exactly.
    FirstCheckpoint { threshold: i64 },
    /// Past the threshold, on a multiple of ten.
    Interval { count: u64 },
    /// High count, on a multiple of twenty-five.
    Escalation { count: u64 },
}

impl Suggestion {
    /// Every suggestion that applies to `count`, in emission order.
    pub fn for_count(count: u64, threshold: i64) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();
        let signed = i64::try_from(count).unwrap_or(i64::MAX);

        if signed == threshold {
            suggestions.push(Suggestion::FirstCheckpoint { threshold });
        }

        if signed > threshold && count % INTERVAL == 0 {
            suggestions.push(Suggestion::Interval { count });
        }

        if count >= ESCALATION_START && count % ESCALATION_INTERVAL == 0 {
            suggestions.push(Suggestion::Escalation { count });
        }

        suggestions
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::FirstCheckpoint { threshold } => write!(
                f,
                "[StrategicCompact] {} tool calls - consider /compact to preserve context",
                threshold
            ),
            Suggestion::Interval { count } => write!(
                f,
                "[StrategicCompact] {} tool calls - use /compact if transitioning to new task",
                count
            ),
            Suggestion::Escalation { count } => write!(
                f,
                "[StrategicCompact] {} tool calls - strongly recommend /compact to reduce token usage",
                count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_below_threshold() {
        for count in 1..20 {
            assert!(Suggestion::for_count(count, 20).is_empty(), "count {}", count);
        }
    }

    #[test]
    fn test_first_checkpoint() {
        let suggestions = Suggestion::for_count(20, 20);
        assert_eq!(suggestions, vec![Suggestion::FirstCheckpoint { threshold: 20 }]);
        assert!(suggestions[0]
            .to_string()
            .contains("20 tool calls - consider /compact"));
    }

    #[test]
    fn test_interval_after_threshold() {
        assert_eq!(
            Suggestion::for_count(30, 20),
            vec![Suggestion::Interval { count: 30 }]
        );
        assert!(Suggestion::for_count(35, 20).is_empty());
        // Multiples of ten before the threshold stay quiet
        assert!(Suggestion::for_count(10, 20).is_empty());
    }

    #[test]
    fn test_fifty_fires_interval_and_escalation() {
        assert_eq!(
            Suggestion::for_count(50, 20),
            vec![
                Suggestion::Interval { count: 50 },
                Suggestion::Escalation { count: 50 },
            ]
        );
    }

    #[test]
    fn test_escalation_alone() {
        assert_eq!(
            Suggestion::for_count(75, 20),
            vec![Suggestion::Escalation { count: 75 }]
        );
        assert!(Suggestion::for_count(25, 20).is_empty());
    }

    #[test]
    fn test_escalation_ignores_threshold() {
        assert_eq!(
            Suggestion::for_count(50, 100),
            vec![Suggestion::Escalation { count: 50 }]
        );
    }

    #[test]
    fn test_threshold_on_interval_fires_once_for_checkpoint() {
        // c == T is not c > T, so only the checkpoint fires at 40
        assert_eq!(
            Suggestion::for_count(40, 40),
            vec![Suggestion::FirstCheckpoint { threshold: 40 }]
        );
    }

    #[test]
    fn test_negative_threshold() {
        assert_eq!(
            Suggestion::for_count(10, -3),
            vec![Suggestion::Interval { count: 10 }]
        );
        assert!(Suggestion::for_count(7, -3).is_empty());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Suggestion::Interval { count: 60 }.to_string(),
            "[StrategicCompact] 60 tool calls - use /compact if transitioning to new task"
        );
        assert_eq!(
            Suggestion::Escalation { count: 100 }.to_string(),
            "[StrategicCompact] 100 tool calls - strongly recommend /compact to reduce token usage"
        );
    }
}
