//! Aggregate statistics over stored results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::results::{accuracy, GradedResult};

/// Totals for one topic label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicStats {
    /// Number of graded quizzes.
    pub attempts: usize,
    /// Sum of scores across attempts.
    pub score: u32,
    /// Sum of exercise counts across attempts.
    pub total: u32,
    /// `score / total` across all attempts.
    pub accuracy: f64,
    /// Highest single-attempt accuracy.
    pub best_accuracy: f64,
}

impl TopicStats {
    fn add(&mut self, record: &GradedResult) {
        self.attempts += 1;
        self.score += record.score;
        self.total += record.total;
        self.accuracy = accuracy(self.score, self.total);
        self.best_accuracy = self.best_accuracy.max(record.accuracy());
    }
}

/// Per-topic and overall statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Keyed by the topic label stored with each result.
    pub per_topic: BTreeMap<String, TopicStats>,
    pub overall: TopicStats,
}

/// Aggregate `records` by topic.
pub fn compute_history_stats(records: &[GradedResult]) -> HistoryStats {
    let mut stats = HistoryStats::default();
    for record in records {
        stats
            .per_topic
            .entry(record.topic.clone())
            .or_default()
            .add(record);
        stats.overall.add(record);
    }
    stats
}
