use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PORTAL_URL: &str = "https://exams.keralauniversity.ac.in/Login/check1";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub portal: PortalSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalSettings {
    /// Page carrying the notification table
    pub url: String,
    /// Whole-request timeout for one page fetch (seconds)
    pub timeout_secs: u64,
    /// Rewrite relative PDF links into absolute ones
    pub resolve_links: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Defaults, then `config/default.toml` if present, then
    /// `EXAM_NOTICES__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("portal.url", DEFAULT_PORTAL_URL)?
            .set_default("portal.timeout_secs", 30)?
            .set_default("portal.resolve_links", true)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("EXAM_NOTICES").separator("__"))
            .build()?
            .try_deserialize()
    }
}
