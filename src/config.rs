use serde::{Deserialize, Serialize};
use crate::utils::constants::{API_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_USER_ID};

const SUPPORTED_LANGUAGES: &[&str] = &["ES", "EN"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_id: String,
    pub language: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("USER_ID"),
            option_env!("LANGUAGE"),
            option_env!("LOG_LEVEL"),
        )
    }

    /// Construye la configuración; valores vacíos o inválidos caen al default
    pub fn from_values(
        api_base_url: Option<&str>,
        user_id: Option<&str>,
        language: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let language = non_empty(language)
            .map(str::to_uppercase)
            .filter(|l| SUPPORTED_LANGUAGES.contains(&l.as_str()))
            .unwrap_or(defaults.language);

        let log_level = non_empty(log_level)
            .filter(|l| l.parse::<log::Level>().is_ok())
            .map(str::to_lowercase)
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url: non_empty(api_base_url)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            user_id: non_empty(user_id)
                .map(str::to_string)
                .unwrap_or(defaults.user_id),
            language,
            log_level,
        }
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
