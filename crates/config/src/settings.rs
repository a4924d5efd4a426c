use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub provider: ProviderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Tag echoed in the `service` field of transcript responses.
    pub service_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    /// Origin serving watch pages, e.g. `https://www.youtube.com`.
    pub base_url: String,
    pub accept_language: String,
    /// Languages searched when a fetch asks for the provider default.
    pub default_languages: Vec<String>,
    /// Per-request HTTP timeout. Unset means wait for the upstream indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("TUBESCRIPT")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .with_list_parse_key("provider.default_languages")
                    .try_parsing(true),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("app.service_name", "railway-youtube-transcript-api")?
            .set_default("provider.base_url", "https://www.youtube.com")?
            .set_default("provider.accept_language", "en-US")?
            .set_default("provider.default_languages", vec!["en"])?
            .set_default("provider.timeout_secs", None::<u64>)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_origins: Vec::new(),
                service_name: "railway-youtube-transcript-api".to_string(),
            },
            provider: ProviderSettings {
                base_url: "https://www.youtube.com".to_string(),
                accept_language: "en-US".to_string(),
                default_languages: vec!["en".to_string()],
                timeout_secs: None,
            },
        }
    }
}
