//! Sieve configuration: feed URL, output path, blocklist, notes.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SieveError, SieveResult};

/// Configuration stored in ~/.config/calsieve/config.toml.
#[derive(Debug, Deserialize)]
pub struct SieveConfig {
    /// Feed URL to fetch
    pub url: String,

    /// Where the filtered .ics gets written (supports `~`)
    pub output: String,

    /// Event titles and UIDs to drop (exact, case-sensitive match)
    #[serde(default)]
    pub blocklist: Vec<String>,

    /// Event title -> note appended to that event's description.
    /// Keys are lower-cased on load; the sieve looks notes up by
    /// lower-cased title.
    #[serde(default)]
    pub notes: HashMap<String, String>,
}

impl SieveConfig {
    /// Load config from the default location (~/.config/calsieve/config.toml).
    pub fn load_default() -> SieveResult<Self> {
        Self::load(&Self::config_path()?)
    }

    /// Load config from an explicit path.
    pub fn load(path: &Path) -> SieveResult<Self> {
        if !path.exists() {
            return Err(SieveError::Config(format!(
                "Config file not found at {}\n\n\
                Create it with your feed URL and output path:\n\n\
                url = \"https://example.org/timetable.ics\"\n\
                output = \"~/calendar/filtered.ics\"\n\n\
                blocklist = [\"Lunch\"]\n\n\
                [notes]\n\
                \"Seminar\" = \"Room changed to B2\"",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> SieveResult<Self> {
        let mut config: SieveConfig =
            toml::from_str(content).map_err(|e| SieveError::Config(e.to_string()))?;

        // The sieve's note lookup contract is lower-cased keys; normalize
        // here so the TOML can spell titles naturally.
        config.notes = config
            .notes
            .into_iter()
            .map(|(key, note)| (key.to_lowercase(), note))
            .collect();

        Ok(config)
    }

    /// The default config file path (~/.config/calsieve/config.toml).
    pub fn config_path() -> SieveResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SieveError::Config("Could not determine config directory".into()))?;

        Ok(config_dir.join("calsieve").join("config.toml"))
    }

    /// The blocklist as a set, the shape the sieve consumes.
    pub fn blocklist_set(&self) -> HashSet<String> {
        self.blocklist.iter().cloned().collect()
    }

    /// The output path with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config = SieveConfig::parse(
            r#"
url = "https://example.org/feed.ics"
output = "~/calendar/filtered.ics"

blocklist = ["Lunch", "evt-uid-1234"]

[notes]
"Seminar" = "Room changed to B2"
"#,
        )
        .unwrap();

        assert_eq!(config.url, "https://example.org/feed.ics");
        assert_eq!(config.blocklist, vec!["Lunch", "evt-uid-1234"]);
        assert_eq!(
            config.notes.get("seminar").map(String::as_str),
            Some("Room changed to B2")
        );
    }

    #[test]
    fn blocklist_and_notes_default_to_empty() {
        let config = SieveConfig::parse(
            r#"
url = "https://example.org/feed.ics"
output = "out.ics"
"#,
        )
        .unwrap();

        assert!(config.blocklist.is_empty());
        assert!(config.notes.is_empty());
        assert!(config.blocklist_set().is_empty());
    }

    #[test]
    fn note_keys_are_lowercased_on_load() {
        let config = SieveConfig::parse(
            r#"
url = "u"
output = "o"

[notes]
"MATH 101" = "Bring calculator"
"#,
        )
        .unwrap();

        assert!(config.notes.contains_key("math 101"));
        assert!(!config.notes.contains_key("MATH 101"));
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let result = SieveConfig::parse(r#"output = "o""#);

        assert!(matches!(result, Err(SieveError::Config(_))));
    }

    #[test]
    fn missing_file_mentions_the_path() {
        let result = SieveConfig::load(Path::new("/nonexistent/calsieve.toml"));

        match result {
            Err(SieveError::Config(message)) => {
                assert!(message.contains("/nonexistent/calsieve.toml"))
            }
            other => panic!("expected Config error, got {:?}", other.map(|_| ())),
        }
    }
}
