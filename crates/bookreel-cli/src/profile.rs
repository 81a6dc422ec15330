//! Resolution of the active extraction profile.

use anyhow::Context;
use bookreel_core::{AppConfig, ProfilePatterns};
use bookreel_scraper::{BookExtractor, ExtractionProfile};

/// Returns the profile patterns named by `BOOKREEL_PROFILE_PATH`, or the
/// built-in Ridero patterns when none is configured.
pub(crate) fn active_patterns(config: &AppConfig) -> anyhow::Result<ProfilePatterns> {
    match &config.profile_path {
        Some(path) => {
            let patterns = bookreel_core::load_profile_patterns(path)?;
            tracing::info!(
                profile = %patterns.name,
                path = %path.display(),
                "loaded extraction profile"
            );
            Ok(patterns)
        }
        None => Ok(ProfilePatterns::ridero()),
    }
}

/// Compiles the active profile into an extractor.
pub(crate) fn active_extractor(config: &AppConfig) -> anyhow::Result<BookExtractor> {
    if config.profile_path.is_none() {
        return Ok(BookExtractor::default());
    }
    let patterns = active_patterns(config)?;
    let profile = ExtractionProfile::compile(&patterns)
        .with_context(|| format!("compiling extraction profile '{}'", patterns.name))?;
    Ok(BookExtractor::new(profile))
}

pub(crate) fn run_profile(config: &AppConfig) -> anyhow::Result<()> {
    let patterns = active_patterns(config)?;
    print!("{}", serde_yaml::to_string(&patterns)?);
    Ok(())
}
