//! Hand-maintained word lists used by the textual match strategies.
//!
//! The tables live in YAML so they can be extended without touching the
//! matching code. A default copy is compiled in from `config/lexicon.yaml`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const BUILTIN_LEXICON: &str = include_str!("../config/lexicon.yaml");

/// A long form and its short form, expanded in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    pub full: String,
    pub short: String,
}

/// Interchangeable names for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryClass {
    pub canonical: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

impl CountryClass {
    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.variants.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub abbreviations: Vec<Abbreviation>,
    #[serde(default)]
    pub countries: Vec<CountryClass>,
}

impl Lexicon {
    /// The compiled-in default tables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(BUILTIN_LEXICON)
    }

    /// Parse, normalize (trim + lowercase) and validate a YAML lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LexiconFileParse`] on malformed YAML and
    /// [`ConfigError::Validation`] on empty terms or a name claimed by two
    /// country classes.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let mut lexicon: Lexicon = serde_yaml::from_str(content)?;
        lexicon.normalize();
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Every name in the country class containing `query`, canonical first.
    ///
    /// Falls back to the normalized query alone when no class claims it.
    #[must_use]
    pub fn country_variations(&self, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.countries
            .iter()
            .find(|class| class.names().any(|name| name == needle))
            .map_or_else(
                || vec![needle.clone()],
                |class| class.names().map(str::to_owned).collect(),
            )
    }

    fn normalize(&mut self) {
        let clean = |s: &mut String| *s = s.trim().to_lowercase();
        for abbr in &mut self.abbreviations {
            clean(&mut abbr.full);
            clean(&mut abbr.short);
        }
        for class in &mut self.countries {
            clean(&mut class.canonical);
            class.variants.iter_mut().for_each(clean);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for abbr in &self.abbreviations {
            if abbr.full.is_empty() || abbr.short.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "abbreviation pair '{}' / '{}' has an empty side",
                    abbr.full, abbr.short
                )));
            }
        }

        let mut owners: HashMap<&str, &str> = HashMap::new();
        for class in &self.countries {
            for name in class.names() {
                if name.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "country class '{}' contains an empty name",
                        class.canonical
                    )));
                }
                if let Some(previous) = owners.insert(name, &class.canonical) {
                    return Err(ConfigError::Validation(format!(
                        "country name '{name}' appears in both '{previous}' and '{}'",
                        class.canonical
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Load the lexicon from `path`, or the built-in tables when `path` is `None`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, ConfigError> {
    let Some(path) = path else {
        return Lexicon::builtin();
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    let lexicon = Lexicon::from_yaml(&content)?;
    tracing::debug!(
        path = %path.display(),
        abbreviations = lexicon.abbreviations.len(),
        countries = lexicon.countries.len(),
        "loaded lexicon override"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_parses() {
        let lexicon = Lexicon::builtin().expect("builtin lexicon must be valid");
        assert!(lexicon
            .abbreviations
            .iter()
            .any(|a| a.full == "street" && a.short == "st"));
        assert!(lexicon
            .abbreviations
            .iter()
            .any(|a| a.full == "los angeles" && a.short == "la"));
        assert!(lexicon.countries.len() >= 13);
    }

    #[test]
    fn usa_variants_share_one_class() {
        let lexicon = Lexicon::builtin().unwrap();
        let expected = lexicon.country_variations("usa");
        for query in ["USA", "United States", "us", " America "] {
            assert_eq!(lexicon.country_variations(query), expected, "query {query}");
        }
        assert!(expected.contains(&"united states".to_string()));
    }

    #[test]
    fn unknown_country_maps_to_itself() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(lexicon.country_variations(" Japan "), vec!["japan"]);
    }

    #[test]
    fn from_yaml_normalizes_case_and_whitespace() {
        let lexicon = Lexicon::from_yaml(
            "abbreviations:\n  - full: ' Highway '\n    short: HWY\ncountries:\n  - canonical: Peru\n",
        )
        .unwrap();
        assert_eq!(lexicon.abbreviations[0].full, "highway");
        assert_eq!(lexicon.abbreviations[0].short, "hwy");
        assert_eq!(lexicon.countries[0].canonical, "peru");
        assert!(lexicon.countries[0].variants.is_empty());
    }

    #[test]
    fn duplicate_country_name_is_rejected() {
        let result = Lexicon::from_yaml(
            "countries:\n  - canonical: south korea\n    variants: [korea]\n  - canonical: north korea\n    variants: [korea]\n",
        );
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("korea")),
            "got {result:?}"
        );
    }

    #[test]
    fn empty_abbreviation_is_rejected() {
        let result = Lexicon::from_yaml("abbreviations:\n  - full: road\n    short: ''\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_lexicon_without_path_uses_builtin() {
        assert_eq!(load_lexicon(None).unwrap(), Lexicon::builtin().unwrap());
    }

    #[test]
    fn load_lexicon_missing_file_is_io_error() {
        let result = load_lexicon(Some(Path::new("/nonexistent/quakemap/lexicon.yaml")));
        assert!(matches!(result, Err(ConfigError::LexiconFileIo { .. })));
    }
}
