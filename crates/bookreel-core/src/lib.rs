pub mod app_config;
pub mod book;
pub mod config;
pub mod listing;
pub mod profile;

pub use app_config::{AppConfig, Environment};
pub use book::BookData;
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{validate_listing_url, ListingUrlError};
pub use profile::{load_profile_patterns, BioWindow, FallbackValues, ProfilePatterns};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read extraction profile {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse extraction profile: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("extraction profile validation failed: {0}")]
    Validation(String),
}
