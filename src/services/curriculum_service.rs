use tokio::sync::OnceCell;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{CurriculumTopic, KnowledgeBase};

/// Loads and caches the knowledge-base document. The first call fetches the
/// configured source (an http(s) URL or a filesystem path) and every later
/// call is served from the cache; the document is never refreshed while the
/// process runs.
pub struct CurriculumStore {
    source: String,
    http: reqwest::Client,
    cache: OnceCell<KnowledgeBase>,
}

impl CurriculumStore {
    pub fn new(source: &str) -> Self {
        CurriculumStore {
            source: source.to_string(),
            http: reqwest::Client::new(),
            cache: OnceCell::new(),
        }
    }

    pub async fn load_topic(&self, topic: &str) -> AppResult<CurriculumTopic> {
        let document = self.document().await?;
        document.topic_content(topic).ok_or_else(|| {
            AppError::NotFound(format!(
                "Geen kurrikulum inhoud gevind vir onderwerp: {}",
                topic
            ))
        })
    }

    /// The topic list the setup screens advertise.
    pub async fn topics(&self) -> AppResult<Vec<String>> {
        Ok(self.document().await?.topics().to_vec())
    }

    async fn document(&self) -> AppResult<&KnowledgeBase> {
        self.cache.get_or_try_init(|| self.fetch()).await
    }

    async fn fetch(&self) -> AppResult<KnowledgeBase> {
        log::info!("Loading knowledge base from '{}'", self.source);

        let raw = if self.source.starts_with("http://") || self.source.starts_with("https://") {
            let response = self.http.get(&self.source).send().await?;
            if !response.status().is_success() {
                return Err(AppError::TransportError(format!(
                    "knowledge base fetch returned {}",
                    response.status()
                )));
            }
            response.text().await?
        } else {
            tokio::fs::read_to_string(&self.source).await.map_err(|err| {
                AppError::InternalError(format!(
                    "Failed to read knowledge base '{}': {}",
                    self.source, err
                ))
            })?
        };

        Ok(serde_json::from_str(&raw)?)
    }
}
