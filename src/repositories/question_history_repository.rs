use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::repositories::local_store::LocalKvStore;

/// Per-topic log of already-asked question texts. One list per topic,
/// shared by every learner on the install.
#[async_trait]
pub trait QuestionHistoryRepository: Send + Sync {
    async fn load(&self, topic: &str) -> AppResult<Vec<String>>;
    async fn store(&self, topic: &str, questions: &[String]) -> AppResult<()>;
}

type HistoryDocument = HashMap<String, Vec<String>>;

pub struct LocalQuestionHistoryRepository {
    store: LocalKvStore,
}

impl LocalQuestionHistoryRepository {
    pub fn new(dir: &Path) -> Self {
        Self {
            store: LocalKvStore::new(dir, "question-history.json"),
        }
    }
}

#[async_trait]
impl QuestionHistoryRepository for LocalQuestionHistoryRepository {
    async fn load(&self, topic: &str) -> AppResult<Vec<String>> {
        let document: HistoryDocument = self.store.read().await?;
        Ok(document.get(topic).cloned().unwrap_or_default())
    }

    async fn store(&self, topic: &str, questions: &[String]) -> AppResult<()> {
        let topic = topic.to_string();
        let questions = questions.to_vec();
        self.store
            .modify(move |document: &mut HistoryDocument| {
                document.insert(topic, questions);
            })
            .await
    }
}
