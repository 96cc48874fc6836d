use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct TheatreConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Live JSON API of the CI dashboard backend
    Http,
    /// Fixed JSON snapshot on disk
    Snapshot,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub kind: SourceKind,
    pub base_url: String,
    pub snapshot_path: String,
}

pub fn load_config() -> anyhow::Result<TheatreConfig> {
    load_config_from("config/theatre")
}

/// Defaults, then the optional config file, then `THEATRE_SECTION__KEY`
/// environment variables.
pub fn load_config_from(path: &str) -> anyhow::Result<TheatreConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("source.kind", "http")?
        .set_default("source.base_url", "http://localhost:5000")?
        .set_default("source.snapshot_path", "config/snapshot.json")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("THEATRE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
