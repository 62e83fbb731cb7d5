use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use emcenter_models::contact::ResponseContract;
use serde::Deserialize;
use url::Url;

pub use crate::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATHS_ENV: &str = "EMCENTER_CONFIG";

/// Loads the config from the files listed in `EMCENTER_CONFIG`, or from the
/// default config file if the variable is not set.
pub fn load_from_env() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATHS_ENV) {
        Ok(paths) => load(&paths.split(':').collect::<Vec<_>>()),
        Err(_) => load(&[DEFAULT_CONFIG_PATH]),
    }
}

/// Loads the config from the given files. Later files override earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the config from the given files and applies the given TOML snippets
/// (e.g. `api.contract = "status"`) on top of them.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub form: FormConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Origin serving the contact endpoint, e.g. `https://emcenter.sk`.
    pub base_url: Url,
    pub contract: ResponseContract,
    /// How long to wait for the server before giving up on a submission.
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    /// Enforce `max_message_length` on the message field.
    pub strict: bool,
    pub max_message_length: usize,
}

/// Fixed strings shown to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesConfig {
    pub success: String,
    pub error: String,
    pub name_required: String,
    pub email_invalid: String,
    pub message_too_long: String,
    pub sending: String,
}
