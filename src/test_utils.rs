#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{FlashcardItem, QuizQuestion};

    /// Builds `count` questions where option "A" is always correct.
    pub fn test_questions(count: usize) -> Vec<QuizQuestion> {
        (0..count)
            .map(|index| QuizQuestion {
                question: format!("Vraag {}?", index + 1),
                options: vec![
                    "A".to_string(),
                    "B".to_string(),
                    "C".to_string(),
                    "D".to_string(),
                ],
                correct_answer: "A".to_string(),
            })
            .collect()
    }

    /// Builds `count` cards with ids stamped the way the generator stamps them.
    pub fn test_cards(topic: &str, difficulty: &str, count: usize) -> Vec<FlashcardItem> {
        (0..count)
            .map(|index| FlashcardItem {
                id: FlashcardItem::batch_id(topic, difficulty, index),
                front: format!("Kaart {}", index + 1),
                back: format!("Antwoord {}", index + 1),
                topic: topic.to_string(),
                difficulty: difficulty.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
pub mod fakes {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use async_trait::async_trait;

    use crate::errors::{AppError, AppResult};
    use crate::models::domain::{AssessmentOutcome, QuizProgressSnapshot};
    use crate::repositories::{OutcomeRepository, ProgressRepository, QuestionHistoryRepository};

    /// In-memory outcome log. Flip `fail_appends` to exercise the
    /// best-effort write path.
    #[derive(Default)]
    pub struct InMemoryOutcomeRepository {
        pub outcomes: RwLock<Vec<AssessmentOutcome>>,
        pub fail_appends: bool,
    }

    #[async_trait]
    impl OutcomeRepository for InMemoryOutcomeRepository {
        async fn append(&self, outcome: AssessmentOutcome) -> AppResult<()> {
            if self.fail_appends {
                return Err(AppError::StorageWriteError("append disabled".to_string()));
            }
            self.outcomes.write().unwrap().push(outcome);
            Ok(())
        }

        async fn query_by_user(&self, user_id: &str) -> AppResult<Vec<AssessmentOutcome>> {
            let mut matching: Vec<AssessmentOutcome> = self
                .outcomes
                .read()
                .unwrap()
                .iter()
                .filter(|outcome| outcome.user_id() == user_id)
                .cloned()
                .collect();
            matching.sort_by(|a, b| b.date().cmp(&a.date()));
            Ok(matching)
        }
    }

    #[derive(Default)]
    pub struct InMemoryProgressRepository {
        pub snapshots: RwLock<HashMap<String, QuizProgressSnapshot>>,
    }

    #[async_trait]
    impl ProgressRepository for InMemoryProgressRepository {
        async fn load(&self, user_id: &str) -> AppResult<Option<QuizProgressSnapshot>> {
            Ok(self.snapshots.read().unwrap().get(user_id).cloned())
        }

        async fn store(&self, user_id: &str, snapshot: &QuizProgressSnapshot) -> AppResult<()> {
            self.snapshots
                .write()
                .unwrap()
                .insert(user_id.to_string(), snapshot.clone());
            Ok(())
        }

        async fn clear(&self, user_id: &str) -> AppResult<()> {
            self.snapshots.write().unwrap().remove(user_id);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct InMemoryQuestionHistoryRepository {
        pub entries: RwLock<HashMap<String, Vec<String>>>,
    }

    #[async_trait]
    impl QuestionHistoryRepository for InMemoryQuestionHistoryRepository {
        async fn load(&self, topic: &str) -> AppResult<Vec<String>> {
            Ok(self
                .entries
                .read()
                .unwrap()
                .get(topic)
                .cloned()
                .unwrap_or_default())
        }

        async fn store(&self, topic: &str, questions: &[String]) -> AppResult<()> {
            self.entries
                .write()
                .unwrap()
                .insert(topic.to_string(), questions.to_vec());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_questions_are_answerable() {
        let questions = test_questions(3);
        assert_eq!(questions.len(), 3);
        assert!(questions
            .iter()
            .all(|question| question.options.contains(&question.correct_answer)));
    }

    #[test]
    fn test_cards_carry_batch_ids() {
        let cards = test_cards("Water", "Maklik", 2);
        assert_eq!(cards[0].id, "Water-Maklik-0");
        assert_eq!(cards[1].id, "Water-Maklik-1");
    }
}
