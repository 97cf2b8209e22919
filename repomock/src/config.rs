use std::env;

/// Settings shared by every double a factory creates
#[derive(Debug, Clone)]
pub struct Config {
    /// `EnvFilter` directive used by [`crate::logging::init`]
    pub log_filter: String,
    /// Identifier field for entity types that do not declare one
    pub default_id_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            default_id_field: "id".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            log_filter: env::var("REPOMOCK_LOG").unwrap_or(defaults.log_filter),
            default_id_field: env::var("REPOMOCK_ID_FIELD")
                .ok()
                .filter(|field| !field.trim().is_empty())
                .unwrap_or(defaults.default_id_field),
        }
    }
}
