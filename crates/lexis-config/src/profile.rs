use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::Config;

pub const MAIN_PROFILE: &str = "main";

/// `<config dir>/lexis`, or the working directory if the platform has none
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("lexis"))
        .unwrap_or_else(|| PathBuf::from(".lexis"))
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

pub fn profile_path(root: &Path, name: &str) -> PathBuf {
    profiles_dir(root).join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize the profiles folder and main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir(root))
        .with_context(|| format!("Failed to create {}", profiles_dir(root).display()))?;

    let main_profile = profile_path(root, MAIN_PROFILE);

    if !main_profile.exists() {
        save_user_profile(root, MAIN_PROFILE, &Config::default())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(profile.value)
}

/// Load a user profile by name, falling back to main, then to defaults
///
/// Environment overrides are applied on top of whatever was loaded.
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(root, name);

    let mut config = if profile_file.exists() {
        read_profile(&profile_file)?
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = profile_path(root, MAIN_PROFILE);
        if main_file.exists() {
            read_profile(&main_file)?
        } else {
            return Ok(Config::new());
        }
    };

    config.apply_env();
    Ok(config)
}

/// Persist `config` under `name`, replacing the previous file
pub fn save_user_profile(root: &Path, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir(root))?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profile_path(root, name);
    fs::write(&file, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    tracing::debug!("Saved profile {name} to {}", file.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn init_creates_main_profile_once() {
        let root = TempDir::new().unwrap();
        init_user_config(root.path()).unwrap();

        let main = profile_path(root.path(), MAIN_PROFILE);
        assert!(main.exists());

        let mut custom = Config::default();
        custom.lexicon.word_directory = "vocab".into();
        save_user_profile(root.path(), MAIN_PROFILE, &custom).unwrap();

        // A second init must not clobber edits
        init_user_config(root.path()).unwrap();
        let loaded = read_profile(&main).unwrap();
        assert_eq!(loaded.lexicon.word_directory, "vocab");
    }

    #[test]
    fn missing_profile_falls_back_to_main() {
        let root = TempDir::new().unwrap();
        let mut main = Config::default();
        main.dictionary.dictionary_id = "gcide".into();
        save_user_profile(root.path(), MAIN_PROFILE, &main).unwrap();

        let loaded = load_user_profile(root.path(), "work").unwrap();
        assert_eq!(loaded.dictionary.dictionary_id, "gcide");
    }

    #[test]
    fn empty_root_loads_defaults() {
        let root = TempDir::new().unwrap();
        let loaded = load_user_profile(root.path(), MAIN_PROFILE).unwrap();
        assert_eq!(loaded.lexicon, Config::default().lexicon);
    }

    #[test]
    fn corrupt_profile_is_an_error() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(profiles_dir(root.path())).unwrap();
        fs::write(profile_path(root.path(), MAIN_PROFILE), "{not json").unwrap();
        assert!(load_user_profile(root.path(), MAIN_PROFILE).is_err());
    }
}
