use std::sync::Arc;

use crate::errors::AppResult;
use crate::repositories::question_history_repository::QuestionHistoryRepository;

/// Upper bound on remembered question texts per topic. Oldest entries fall
/// off first.
pub const MAX_HISTORY_PER_TOPIC: usize = 50;

/// Read-modify-write bookkeeping over the per-topic question log. The
/// repository stores plain lists; the cap and ordering live here.
pub struct QuestionHistoryService {
    repository: Arc<dyn QuestionHistoryRepository>,
}

impl QuestionHistoryService {
    pub fn new(repository: Arc<dyn QuestionHistoryRepository>) -> Self {
        QuestionHistoryService { repository }
    }

    /// Everything recorded for the topic, oldest first. Empty when nothing
    /// has been recorded yet.
    pub async fn exclusions_for(&self, topic: &str) -> AppResult<Vec<String>> {
        self.repository.load(topic).await
    }

    /// Append the new texts, then retain only the newest
    /// `MAX_HISTORY_PER_TOPIC`. Not idempotent: recording an identical batch
    /// twice duplicates it until the cap pushes the copies out.
    pub async fn record_questions(&self, topic: &str, questions: &[String]) -> AppResult<()> {
        let mut history = self.repository.load(topic).await?;
        history.extend(questions.iter().cloned());
        if history.len() > MAX_HISTORY_PER_TOPIC {
            let excess = history.len() - MAX_HISTORY_PER_TOPIC;
            history.drain(..excess);
        }
        self.repository.store(topic, &history).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fakes::InMemoryQuestionHistoryRepository;

    fn service() -> QuestionHistoryService {
        QuestionHistoryService::new(Arc::new(InMemoryQuestionHistoryRepository::default()))
    }

    fn texts(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(|i| format!("Vraag {}?", i)).collect()
    }

    #[tokio::test]
    async fn unrecorded_topic_has_no_exclusions() {
        let service = service();
        assert!(service.exclusions_for("Water").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn recording_appends_in_order() {
        let service = service();
        service.record_questions("Water", &texts(0..3)).await.unwrap();
        service.record_questions("Water", &texts(3..5)).await.unwrap();

        let history = service.exclusions_for("Water").await.unwrap();
        assert_eq!(history, texts(0..5));
    }

    #[tokio::test]
    async fn history_caps_at_fifty_keeping_newest() {
        let service = service();
        for batch in 0..12 {
            let start = batch * 5;
            service
                .record_questions("Water", &texts(start..start + 5))
                .await
                .unwrap();
        }

        let history = service.exclusions_for("Water").await.unwrap();
        assert_eq!(history.len(), MAX_HISTORY_PER_TOPIC);
        // 60 recorded, first 10 evicted.
        assert_eq!(history.first().map(String::as_str), Some("Vraag 10?"));
        assert_eq!(history.last().map(String::as_str), Some("Vraag 59?"));
    }

    #[tokio::test]
    async fn identical_batches_duplicate() {
        let service = service();
        let batch = texts(0..3);
        service.record_questions("Water", &batch).await.unwrap();
        service.record_questions("Water", &batch).await.unwrap();

        let history = service.exclusions_for("Water").await.unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history[0], history[3]);
    }

    #[tokio::test]
    async fn topics_are_independent() {
        let service = service();
        service.record_questions("Water", &texts(0..2)).await.unwrap();
        service.record_questions("Lug", &texts(2..3)).await.unwrap();

        assert_eq!(service.exclusions_for("Water").await.unwrap().len(), 2);
        assert_eq!(service.exclusions_for("Lug").await.unwrap().len(), 1);
    }
}
