use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::domain::{DailyProgress, ProgressEntry, ProgressStats};

/// In-memory store of answer attempts. Attempts live only as long as the
/// process; there is no persistence layer behind this.
pub struct ProgressService {
    entries: RwLock<Vec<ProgressEntry>>,
}

impl ProgressService {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn record(
        &self,
        user_id: &str,
        question_id: &str,
        correct: bool,
    ) -> ProgressEntry {
        let entry = ProgressEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            question_id: question_id.to_string(),
            correct,
            attempt_date: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.push(entry.clone());

        entry
    }

    /// Aggregate stats, optionally restricted to one user. Days are bucketed
    /// in UTC and returned in ascending date order.
    pub async fn stats(&self, user_id: Option<&str>) -> ProgressStats {
        let entries = self.entries.read().await;

        let mut total_attempts = 0u64;
        let mut correct_attempts = 0u64;
        let mut daily: BTreeMap<String, (u64, u64)> = BTreeMap::new();

        for entry in entries.iter() {
            if let Some(user_id) = user_id {
                if entry.user_id != user_id {
                    continue;
                }
            }

            total_attempts += 1;
            if entry.correct {
                correct_attempts += 1;
            }

            let day = entry.attempt_date.format("%Y-%m-%d").to_string();
            let bucket = daily.entry(day).or_insert((0, 0));
            bucket.0 += 1;
            if entry.correct {
                bucket.1 += 1;
            }
        }

        let accuracy_rate = if total_attempts == 0 {
            0.0
        } else {
            correct_attempts as f64 / total_attempts as f64
        };

        ProgressStats {
            total_attempts,
            correct_attempts,
            accuracy_rate,
            daily_progress: daily
                .into_iter()
                .map(|(date, (attempts, correct))| DailyProgress {
                    date,
                    attempts,
                    correct,
                })
                .collect(),
        }
    }
}

impl Default for ProgressService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn stats_start_empty() {
        let service = ProgressService::new();
        let stats = service.stats(None).await;
        assert_eq!(stats, ProgressStats::empty());
    }

    #[actix_rt::test]
    async fn record_assigns_id_and_timestamp() {
        let service = ProgressService::new();
        let entry = service.record("user-1", "question-1", true).await;

        assert!(!entry.id.is_empty());
        assert_eq!(entry.user_id, "user-1");
        assert_eq!(entry.question_id, "question-1");
        assert!(entry.correct);
    }

    #[actix_rt::test]
    async fn stats_count_attempts_and_accuracy() {
        let service = ProgressService::new();
        service.record("user-1", "q1", true).await;
        service.record("user-1", "q2", false).await;
        service.record("user-1", "q3", true).await;
        service.record("user-1", "q4", true).await;

        let stats = service.stats(None).await;
        assert_eq!(stats.total_attempts, 4);
        assert_eq!(stats.correct_attempts, 3);
        assert!((stats.accuracy_rate - 0.75).abs() < f64::EPSILON);
    }

    #[actix_rt::test]
    async fn stats_filter_by_user() {
        let service = ProgressService::new();
        service.record("user-1", "q1", true).await;
        service.record("user-2", "q1", false).await;

        let stats = service.stats(Some("user-1")).await;
        assert_eq!(stats.total_attempts, 1);
        assert_eq!(stats.correct_attempts, 1);

        let stats = service.stats(Some("user-3")).await;
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.accuracy_rate, 0.0);
    }

    #[actix_rt::test]
    async fn stats_bucket_attempts_by_day() {
        let service = ProgressService::new();
        service.record("user-1", "q1", true).await;
        service.record("user-1", "q2", false).await;

        let stats = service.stats(None).await;
        // Both attempts were recorded just now, so they share one bucket.
        assert_eq!(stats.daily_progress.len(), 1);
        assert_eq!(stats.daily_progress[0].attempts, 2);
        assert_eq!(stats.daily_progress[0].correct, 1);
        assert_eq!(
            stats.daily_progress[0].date,
            Utc::now().format("%Y-%m-%d").to_string()
        );
    }
}
