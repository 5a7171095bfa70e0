use crate::core::alphabet::Alphabet;
use crate::encoders::codec::Codec;
use crate::encoders::errors::AlphabetError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the alphabet used when neither the caller nor the settings pick one.
pub const FALLBACK_ALPHABET: &str = "hex_lower";

/// Project-local override file, looked up in the working directory.
pub const LOCAL_OVERRIDE_FILE: &str = "hexd.toml";

/// Errors that can occur while loading or querying the alphabet registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read alphabet registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse alphabet registry: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("alphabet '{name}' not found{}", suggestion_hint(.suggestion))]
    UnknownAlphabet {
        name: String,
        suggestion: Option<String>,
    },
    #[error("alphabet '{name}' is invalid: {source}")]
    InvalidAlphabet {
        name: String,
        #[source]
        source: AlphabetError,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 16 symbols, in nibble order
    pub chars: String,
    /// Free-form description shown by `config show`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Validates the configured symbols.
    pub fn alphabet(&self) -> Result<Alphabet, AlphabetError> {
        Alphabet::try_new(self.chars.as_bytes())
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is requested explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Whether decoding accepts both cases by default (true when unset)
    #[serde(default)]
    pub mixed_case: Option<bool>,
}

impl Settings {
    pub fn default_alphabet(&self) -> &str {
        self.default_alphabet.as_deref().unwrap_or(FALLBACK_ALPHABET)
    }

    pub fn mixed_case(&self) -> bool {
        self.mixed_case.unwrap_or(true)
    }
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, RegistryError> {
        let registry: Self = toml::from_str(content)?;
        debug!(alphabets = registry.alphabets.len(), "parsed alphabet registry");
        Ok(registry)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, RegistryError> {
        Self::from_toml(include_str!("../../alphabets.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading alphabet registry");
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/hexd/alphabets.toml` (user overrides)
    /// 3. `./hexd.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// Override files that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, RegistryError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("hexd").join("alphabets.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new(LOCAL_OVERRIDE_FILE));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => self.merge(overrides),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping alphabet override file"),
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace alphabets with the same name in `self`; settings
    /// from `other` replace ours only where `other` sets them.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        debug!(alphabets = other.alphabets.len(), "merging alphabet registry");
        self.alphabets.extend(other.alphabets);

        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
        if other.settings.mixed_case.is_some() {
            self.settings.mixed_case = other.settings.mixed_case;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a codec for the named alphabet, validating it.
    pub fn codec(&self, name: &str) -> Result<Codec, RegistryError> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let available: Vec<&str> = self.names();
            RegistryError::UnknownAlphabet {
                name: name.to_string(),
                suggestion: find_closest_alphabet(name, &available),
            }
        })?;

        let alphabet = config.alphabet().map_err(|source| RegistryError::InvalidAlphabet {
            name: name.to_string(),
            source,
        })?;

        debug!(alphabet_name = name, %alphabet, "built codec from registry");
        Ok(Codec::new(alphabet))
    }

    /// Builds a codec for the configured default alphabet.
    pub fn default_codec(&self) -> Result<Codec, RegistryError> {
        self.codec(self.settings.default_alphabet())
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered alphabet name, if any is within a few edits.
pub fn find_closest_alphabet(name: &str, available: &[&str]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chars: &str) -> AlphabetConfig {
        AlphabetConfig {
            chars: chars.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_load_default_config() {
        let registry = AlphabetRegistry::load_default().unwrap();
        assert!(registry.alphabets.contains_key("hex_lower"));
        assert!(registry.alphabets.contains_key("hex_upper"));
        assert_eq!(registry.settings.default_alphabet(), "hex_lower");
        assert!(registry.settings.mixed_case());
    }

    #[test]
    fn test_every_builtin_alphabet_is_valid() {
        let registry = AlphabetRegistry::load_default().unwrap();
        for name in registry.names() {
            assert!(registry.codec(name).is_ok(), "builtin alphabet {} is invalid", name);
        }
    }

    #[test]
    fn test_builtin_codecs_match_standard_ones() {
        let registry = AlphabetRegistry::load_default().unwrap();
        assert_eq!(registry.codec("hex_lower").unwrap(), crate::LOWER);
        assert_eq!(registry.codec("hex_upper").unwrap(), crate::UPPER);
        assert_eq!(registry.default_codec().unwrap(), crate::LOWER);
    }

    #[test]
    fn test_unknown_alphabet_suggests_close_name() {
        let registry = AlphabetRegistry::load_default().unwrap();
        match registry.codec("hex_lowr") {
            Err(RegistryError::UnknownAlphabet { name, suggestion }) => {
                assert_eq!(name, "hex_lowr");
                assert_eq!(suggestion.as_deref(), Some("hex_lower"));
            }
            other => panic!("expected UnknownAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_alphabet_message() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let err = registry.codec("hex_lowr").unwrap_err();
        assert_eq!(
            err.to_string(),
            "alphabet 'hex_lowr' not found (did you mean 'hex_lower'?)"
        );

        let err = registry.codec("completely_different").unwrap_err();
        assert_eq!(err.to_string(), "alphabet 'completely_different' not found");
    }

    #[test]
    fn test_invalid_alphabet_in_config() {
        let registry = AlphabetRegistry::from_toml(
            r#"
            [alphabets.broken]
            chars = "0123456789abcdeA"
            "#,
        )
        .unwrap();
        match registry.codec("broken") {
            Err(RegistryError::InvalidAlphabet { name, source }) => {
                assert_eq!(name, "broken");
                assert_eq!(
                    source,
                    AlphabetError::DuplicateSymbol {
                        symbol: b'A',
                        first: 10,
                        second: 15,
                    }
                );
            }
            other => panic!("expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_short_alphabet_in_config() {
        let registry = AlphabetRegistry::from_toml(
            r#"
            [alphabets.short]
            chars = "0123"
            "#,
        )
        .unwrap();
        assert!(matches!(
            registry.codec("short"),
            Err(RegistryError::InvalidAlphabet {
                source: AlphabetError::WrongLength { actual: 4 },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            AlphabetRegistry::from_toml("[alphabets.x]\nchars = 42"),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = AlphabetRegistry::load_from_file(Path::new("/nonexistent/hexd/alphabets.toml"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/hexd/alphabets.toml"));
    }

    #[test]
    fn test_merge_configs() {
        let mut base = AlphabetRegistry::default();
        base.alphabets.insert("one".to_string(), config("0123456789abcdef"));
        base.alphabets.insert("two".to_string(), config("abcdefghijklmnop"));

        let mut overrides = AlphabetRegistry::default();
        overrides.alphabets.insert("two".to_string(), config("cbdefghijklnrtuv"));
        overrides.alphabets.insert("three".to_string(), config("0123456789ABCDEF"));
        overrides.settings.mixed_case = Some(false);

        base.merge(overrides);

        assert_eq!(base.names(), vec!["one", "three", "two"]);
        assert_eq!(base.get_alphabet("two").unwrap().chars, "cbdefghijklnrtuv");
        assert!(!base.settings.mixed_case());
        // unset in the override, so the fallback stays
        assert_eq!(base.settings.default_alphabet(), FALLBACK_ALPHABET);
    }

    #[test]
    fn test_settings_from_toml() {
        let registry = AlphabetRegistry::from_toml(
            r#"
            [settings]
            default_alphabet = "hex_upper"
            mixed_case = false
            "#,
        )
        .unwrap();
        assert_eq!(registry.settings.default_alphabet(), "hex_upper");
        assert!(!registry.settings.mixed_case());
        assert!(registry.alphabets.is_empty());
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("hex_lower", "hex_lower"), 0);
        assert_eq!(levenshtein_distance("hex_lower", "hex_upper"), 3);
        assert_eq!(levenshtein_distance("modhx", "modhex"), 1);
        assert_eq!(levenshtein_distance("", "modhex"), 6);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = ["hex_lower", "hex_upper", "modhex"];
        assert_eq!(find_closest_alphabet("modhx", &names), Some("modhex".to_string()));
        assert_eq!(find_closest_alphabet("hex_uper", &names), Some("hex_upper".to_string()));
        assert_eq!(find_closest_alphabet("base64", &names), None);
        assert_eq!(find_closest_alphabet("anything", &[]), None);
    }
}
