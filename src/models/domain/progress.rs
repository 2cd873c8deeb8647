use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded answer attempt.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: String,
    pub user_id: String,
    pub question_id: String,
    pub correct: bool,
    pub attempt_date: DateTime<Utc>,
}

/// Attempts bucketed by calendar day (UTC), `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DailyProgress {
    pub date: String,
    pub attempts: u64,
    pub correct: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_attempts: u64,
    pub correct_attempts: u64,
    pub accuracy_rate: f64,
    pub daily_progress: Vec<DailyProgress>,
}

impl ProgressStats {
    pub fn empty() -> Self {
        Self {
            total_attempts: 0,
            correct_attempts: 0,
            accuracy_rate: 0.0,
            daily_progress: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_zero_accuracy() {
        let stats = ProgressStats::empty();
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.accuracy_rate, 0.0);
        assert!(stats.daily_progress.is_empty());
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = ProgressStats::empty();
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("totalAttempts").is_some());
        assert!(json.get("correctAttempts").is_some());
        assert!(json.get("accuracyRate").is_some());
        assert!(json.get("dailyProgress").is_some());
    }
}
