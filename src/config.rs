use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
// Any model with structured output support works here.
pub const DEFAULT_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const MODEL_VAR: &str = "COMMITGEN_MODEL";
pub const API_URL_VAR: &str = "COMMITGEN_API_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Ok(Self::from_lookup(workspace_hint, |name| env::var(name).ok()))
    }

    pub fn from_lookup<F>(workspace_hint: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_key: non_empty(API_KEY_VAR),
            api_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            workspace_root: workspace_hint.to_path_buf(),
        }
    }

    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(format!("{API_KEY_VAR} environment variable not set"))
        })
    }
}
