use std::path::PathBuf;
use std::sync::Arc;

use lexis_config::Config;
use lexis_config::profile::save_user_profile;
use tokio::sync::RwLock;

/// Where settings changes get persisted
#[derive(Debug, Clone)]
pub struct ProfileLocation {
    pub root: PathBuf,
    pub name: String,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    profile: Option<ProfileLocation>,
}

impl AppState {
    pub fn new(config: Config, profile: Option<ProfileLocation>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            profile,
        }
    }

    /// In-memory state that never writes settings to disk
    pub fn ephemeral(config: Config) -> Self {
        Self::new(config, None)
    }

    pub fn profile(&self) -> Option<&ProfileLocation> {
        self.profile.as_ref()
    }

    /// Apply one settings change and persist the result
    pub async fn update_setting(&self, field: &str, value: &str) -> anyhow::Result<()> {
        let mut config = self.config.write().await;
        config.set_field(field, value)?;

        if let Some(profile) = &self.profile {
            save_user_profile(&profile.root, &profile.name, &config)?;
        }

        tracing::info!("Setting {field} changed to {value}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lexis_config::profile::load_user_profile;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn update_is_persisted() {
        let root = TempDir::new().unwrap();
        let state = AppState::new(
            Config::default(),
            Some(ProfileLocation {
                root: root.path().to_path_buf(),
                name: "main".into(),
            }),
        );

        state.update_setting("word-directory", "vocab").await.unwrap();

        assert_eq!(state.config.read().await.lexicon.word_directory, "vocab");
        let saved = load_user_profile(root.path(), "main").unwrap();
        assert_eq!(saved.lexicon.word_directory, "vocab");
    }

    #[tokio::test]
    async fn rejected_update_changes_nothing() {
        let state = AppState::ephemeral(Config::default());
        assert!(state.update_setting("bogus", "1").await.is_err());
        assert_eq!(*state.config.read().await, Config::default());
    }
}
