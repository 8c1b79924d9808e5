use crate::errors::{config_error, ClientError};

const BASE_URL_VAR: &str = "LIST_API_BASE_URL";
const TOKEN_VAR: &str = "LIST_API_TOKEN";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read configuration from the environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(BASE_URL_VAR)
            .map_err(|_| config_error(format!("{} is not set", BASE_URL_VAR)))?;
        let token = std::env::var(TOKEN_VAR).ok();

        Ok(Self { base_url, token })
    }
}
