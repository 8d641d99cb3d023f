//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Terminal client configuration.
///
/// Paths default to the platform directories for `pixel-love`, falling back
/// to a `.pixel-love` directory under the working directory when the
/// platform has none.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding the progress record.
    pub save_data_dir: PathBuf,
    /// Root of the per-session log directories.
    pub log_dir: PathBuf,
    /// Loads scenes and story from this directory instead of the built-in data.
    pub content_dir: Option<PathBuf>,
    /// Names the log directory of this run.
    pub session_id: Option<String>,
    pub ui: UiConfig,
}

/// Terminal layout and pacing.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Entries kept by the message log.
    pub message_capacity: usize,
    /// Height of the message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Upper bound on the time between two ticks.
    pub tick_ms: u64,
    /// Rings the terminal bell for the finale fanfare.
    pub bell: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_capacity: 64,
            message_panel_height: 6,
            tick_ms: 33,
            bell: true,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let (save_data_dir, log_dir) = default_dirs();
        Self {
            save_data_dir,
            log_dir,
            content_dir: None,
            session_id: None,
            ui: UiConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Directory for the progress record
    /// - `LOG_DIR` - Root directory for session logs
    /// - `CONTENT_DIR` - Directory with `story.ron` and `scenes/`
    /// - `GAME_SESSION_ID` - Log directory name for this run
    /// - `CLI_MESSAGE_CAPACITY` - Message log entries (default: 64)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height (default: 6)
    /// - `CLI_TICK_MS` - Frame interval in milliseconds (default: 33)
    /// - `CLI_BELL` - Ring the terminal bell on the fanfare (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with values supplied by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("SAVE_DATA_DIR").filter(|v| !v.is_empty()) {
            config.save_data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        config.content_dir = lookup("CONTENT_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        config.session_id = lookup("GAME_SESSION_ID").filter(|v| !v.is_empty());

        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }
        if let Some(height) = parse::<u16>(&lookup, "CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(tick) = parse::<u64>(&lookup, "CLI_TICK_MS") {
            config.ui.tick_ms = tick.clamp(1, 1000);
        }
        if let Some(bell) = parse::<bool>(&lookup, "CLI_BELL") {
            config.ui.bell = bell;
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn default_dirs() -> (PathBuf, PathBuf) {
    match ProjectDirs::from("", "", "pixel-love") {
        Some(dirs) => (dirs.data_dir().to_path_buf(), dirs.cache_dir().join("logs")),
        None => {
            let base = PathBuf::from(".pixel-love");
            (base.join("data"), base.join("logs"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_with(&[]);
        assert_eq!(config.ui.message_capacity, 64);
        assert_eq!(config.ui.tick_ms, 33);
        assert!(config.content_dir.is_none());
        assert!(config.session_id.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("SAVE_DATA_DIR", "/tmp/saves"),
            ("CONTENT_DIR", "/tmp/content"),
            ("GAME_SESSION_ID", "dev"),
            ("CLI_MESSAGE_CAPACITY", "10"),
            ("CLI_TICK_MS", "16"),
            ("CLI_BELL", "false"),
        ]);
        assert_eq!(config.save_data_dir, PathBuf::from("/tmp/saves"));
        assert_eq!(config.content_dir, Some(PathBuf::from("/tmp/content")));
        assert_eq!(config.session_id.as_deref(), Some("dev"));
        assert_eq!(config.ui.message_capacity, 10);
        assert_eq!(config.ui.tick_ms, 16);
        assert!(!config.ui.bell);
    }

    #[test]
    fn ignores_malformed_and_clamps() {
        let config = config_with(&[
            ("CLI_MESSAGE_CAPACITY", "lots"),
            ("CLI_MESSAGE_PANEL_HEIGHT", "1"),
            ("CLI_TICK_MS", "0"),
            ("GAME_SESSION_ID", ""),
        ]);
        assert_eq!(config.ui.message_capacity, 64);
        assert_eq!(config.ui.message_panel_height, 3);
        assert_eq!(config.ui.tick_ms, 1);
        assert!(config.session_id.is_none());
    }
}
