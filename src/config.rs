use secrecy::SecretString;
use std::env;

/// Which store receives assessment outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryBackend {
    Local,
    Mongo,
}

impl HistoryBackend {
    fn from_env_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => HistoryBackend::Mongo,
            _ => HistoryBackend::Local,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub gemini_api_key: SecretString,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub knowledge_base_source: String,
    pub history_backend: HistoryBackend,
    pub local_store_dir: String,
    pub reveal_delay_ms: u64,
    pub cors_allowed_origin: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "leersentrum-local".to_string()),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_else(|_| "gemini_api_key".to_string()),
            ),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            knowledge_base_source: env::var("KNOWLEDGE_BASE_SOURCE")
                .unwrap_or_else(|_| "./knowledge-base.json".to_string()),
            history_backend: HistoryBackend::from_env_value(
                &env::var("HISTORY_BACKEND").unwrap_or_else(|_| "local".to_string()),
            ),
            local_store_dir: env::var("LOCAL_STORE_DIR").unwrap_or_else(|_| "./data".to_string()),
            reveal_delay_ms: env::var("REVEAL_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(1500),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let gemini_key = self.gemini_api_key.expose_secret();

        if gemini_key == "gemini_api_key" || gemini_key.is_empty() {
            panic!(
                "FATAL: GEMINI_API_KEY is using default value! Set GEMINI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "leersentrum-test".to_string(),
            gemini_api_key: SecretString::from("test_api_key".to_string()),
            gemini_base_url: "http://127.0.0.1:0".to_string(),
            gemini_model: "gemini-test".to_string(),
            knowledge_base_source: "./knowledge-base.json".to_string(),
            history_backend: HistoryBackend::Local,
            local_store_dir: "./data-test".to_string(),
            reveal_delay_ms: 25,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
