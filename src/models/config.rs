//! Presentation settings for consumers of the entity model.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::types::{ArtworkHost, TypeConstraintError};

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "ANIDB";

/// Errors raised while loading [`PresentationConfig`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid setting: {0}")]
    Invalid(#[from] TypeConstraintError),
}

#[derive(Deserialize)]
struct RawPresentationConfig {
    artwork_host: String,
}

/// Configuration options used when presenting entities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Base URL artwork paths are resolved against.
    pub artwork_host: ArtworkHost,
}

impl PresentationConfig {
    /// Loads settings from defaults, an optional YAML file and `ANIDB_*`
    /// environment variables, later sources overriding earlier ones.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Ok(env_file) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", env_file.display());
        }

        let mut builder = Config::builder().set_default("artwork_host", ArtworkHost::DEFAULT)?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let raw: RawPresentationConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        let artwork_host = ArtworkHost::new(raw.artwork_host).inspect_err(|e| {
            log::error!("Invalid artwork host in settings: {e}");
        })?;
        Ok(Self { artwork_host })
    }
}
