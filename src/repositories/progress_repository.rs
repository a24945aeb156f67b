use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::domain::QuizProgressSnapshot;
use crate::repositories::local_store::LocalKvStore;

/// At most one in-flight quiz snapshot per user. Storing overwrites the
/// previous snapshot; clearing removes it once the quiz finishes.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn load(&self, user_id: &str) -> AppResult<Option<QuizProgressSnapshot>>;
    async fn store(&self, user_id: &str, snapshot: &QuizProgressSnapshot) -> AppResult<()>;
    async fn clear(&self, user_id: &str) -> AppResult<()>;
}

type ProgressDocument = HashMap<String, QuizProgressSnapshot>;

pub struct LocalProgressRepository {
    store: LocalKvStore,
}

impl LocalProgressRepository {
    pub fn new(dir: &Path) -> Self {
        Self {
            store: LocalKvStore::new(dir, "quiz-progress.json"),
        }
    }
}

#[async_trait]
impl ProgressRepository for LocalProgressRepository {
    async fn load(&self, user_id: &str) -> AppResult<Option<QuizProgressSnapshot>> {
        let document: ProgressDocument = self.store.read().await?;
        Ok(document.get(user_id).cloned())
    }

    async fn store(&self, user_id: &str, snapshot: &QuizProgressSnapshot) -> AppResult<()> {
        let user_id = user_id.to_string();
        let snapshot = snapshot.clone();
        self.store
            .modify(move |document: &mut ProgressDocument| {
                document.insert(user_id, snapshot);
            })
            .await
    }

    async fn clear(&self, user_id: &str) -> AppResult<()> {
        let user_id = user_id.to_string();
        self.store
            .modify(move |document: &mut ProgressDocument| {
                document.remove(&user_id);
            })
            .await
    }
}
