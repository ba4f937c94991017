use crate::error::{ErrorBackend, Result};
use std::env;
use std::fmt;
use ww_core::server::default_config::{
    DEFAULT_COMPLETION_BASE_URL, DEFAULT_COMPLETION_MODEL, DEFAULT_SERVER_BACKEND_HOST,
    DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};

/// Settings for the outbound completion service. Built once at startup and
/// handed to the prompt generator.
#[derive(Clone)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("COMPLETION_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = env::var("COMPLETION_BASE_URL")
            .unwrap_or(String::from(DEFAULT_COMPLETION_BASE_URL));
        let model =
            env::var("COMPLETION_MODEL").unwrap_or(String::from(DEFAULT_COMPLETION_MODEL));
        GeneratorConfig {
            api_key,
            base_url,
            model,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .ok_or(ErrorBackend::MissingConfig("JWT_SECRET"))?;
        Ok(AuthConfig { jwt_secret })
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
    pub protocol: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host =
            env::var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
        let port =
            env::var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
        let protocol = env::var("SERVER_BACKEND_PROTOCOL")
            .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));
        ServerConfig {
            host,
            port,
            protocol,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
