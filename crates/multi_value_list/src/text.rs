use std::collections::HashMap;

use tracing::warn;

use crate::error::TextError;

pub const DEFAULT_LANGUAGE: &str = "en";

const BUILTIN_BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.toml")),
    ("de", include_str!("../locales/de.toml")),
    ("es", include_str!("../locales/es.toml")),
    ("fr", include_str!("../locales/fr.toml")),
    ("it", include_str!("../locales/it.toml")),
];

/// The fixed lookup key behind each configurable text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    HeaderTitle,
    HeaderSubtitle,
    SelectionTitle,
    SelectionSubtitle,
    SubmitText,
}

impl TextKey {
    pub const ALL: [TextKey; 5] = [
        TextKey::HeaderTitle,
        TextKey::HeaderSubtitle,
        TextKey::SelectionTitle,
        TextKey::SelectionSubtitle,
        TextKey::SubmitText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::HeaderTitle => "MULTIVALUELIST_CONTROL_DEFAULT_APL_HEADER_TITLE",
            TextKey::HeaderSubtitle => "MULTIVALUELIST_CONTROL_DEFAULT_APL_HEADER_SUBTITLE",
            TextKey::SelectionTitle => "MULTIVALUELIST_CONTROL_DEFAULT_APL_SELECTION_TITLE",
            TextKey::SelectionSubtitle => "MULTIVALUELIST_CONTROL_DEFAULT_APL_SELECTION_SUBTITLE",
            TextKey::SubmitText => "MULTIVALUELIST_CONTROL_DEFAULT_APL_SUBMIT_TEXT",
        }
    }
}

/// Read-only lookup of default display text. The locale is chosen by whoever
/// builds the resolver, never by the generators.
pub trait TextResolver {
    fn lookup(&self, key: &str) -> String;
}

impl<F> TextResolver for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

/// Default texts for one language, loaded from a flat TOML table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBundle {
    language: String,
    entries: HashMap<String, String>,
}

impl TextBundle {
    pub fn from_toml(language: impl Into<String>, raw: &str) -> Result<Self, TextError> {
        let language = language.into();
        let entries = toml::from_str::<HashMap<String, String>>(raw).map_err(|source| {
            TextError::Parse {
                locale: language.clone(),
                source,
            }
        })?;
        Ok(Self { language, entries })
    }

    /// The bundled texts for `locale`: the full tag first, then its language
    /// subtag.
    ///
    /// Unknown languages get the English bundle.
    pub fn builtin(locale: &str) -> Result<Self, TextError> {
        let (language, raw) = match select_bundle(BUILTIN_BUNDLES, locale) {
            Some(found) => found,
            None => {
                warn!(%locale, fallback = DEFAULT_LANGUAGE, "no bundled texts for locale");
                (DEFAULT_LANGUAGE, BUILTIN_BUNDLES[0].1)
            }
        };
        Self::from_toml(language, raw)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    pub fn supported_languages() -> impl Iterator<Item = &'static str> {
        BUILTIN_BUNDLES.iter().map(|(lang, _)| *lang)
    }
}

impl TextResolver for TextBundle {
    // Missing keys echo the key.
    fn lookup(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                warn!(key, language = %self.language, "missing default text");
                key.to_string()
            }
        }
    }
}

fn select_bundle<'a>(
    bundles: &[(&'a str, &'a str)],
    locale: &str,
) -> Option<(&'a str, &'a str)> {
    let tag = normalize_tag(locale);
    let language = tag.split('-').next().unwrap_or_default();
    let selected = [tag.as_str(), language].into_iter().find_map(|wanted| {
        bundles
            .iter()
            .find(|(name, _)| normalize_tag(name) == wanted)
            .copied()
    });
    selected
}

fn normalize_tag(locale: &str) -> String {
    locale.trim().replace('_', "-").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_has_every_key() {
        let bundle = TextBundle::builtin("en-US").expect("bundle");
        assert_eq!(bundle.language(), "en");
        for key in TextKey::ALL {
            assert!(bundle.get(key.as_str()).is_some(), "missing {key:?}");
        }
        assert_eq!(
            bundle.lookup(TextKey::HeaderTitle.as_str()),
            "Create your list"
        );
        assert_eq!(bundle.lookup(TextKey::SubmitText.as_str()), "Done");
    }

    #[test]
    fn every_builtin_bundle_parses_and_is_complete() {
        for language in TextBundle::supported_languages() {
            let bundle = TextBundle::builtin(language).expect("bundle");
            assert_eq!(bundle.language(), language);
            for key in TextKey::ALL {
                assert!(
                    bundle.get(key.as_str()).is_some(),
                    "{language} is missing {key:?}"
                );
            }
        }
    }

    #[test]
    fn matches_on_language_subtag() {
        assert_eq!(TextBundle::builtin("fr_CA").expect("bundle").language(), "fr");
        assert_eq!(TextBundle::builtin("DE-de").expect("bundle").language(), "de");
    }

    #[test]
    fn full_tag_wins_over_language_subtag() {
        let bundles = [("fr", "fr"), ("fr-CA", "fr-CA"), ("en", "en")];
        assert_eq!(select_bundle(&bundles, "fr_ca"), Some(("fr-CA", "fr-CA")));
        assert_eq!(select_bundle(&bundles, "fr-FR"), Some(("fr", "fr")));
        assert_eq!(select_bundle(&bundles, "ja-JP"), None);
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let bundle = TextBundle::builtin("ja-JP").expect("bundle");
        assert_eq!(bundle.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn missing_key_echoes_key() {
        let bundle = TextBundle::from_toml("xx", "").expect("bundle");
        assert_eq!(bundle.lookup("SOME_KEY"), "SOME_KEY");
    }

    #[test]
    fn malformed_bundle_is_an_error() {
        let err = TextBundle::from_toml("xx", "not toml at all =").expect_err("should fail");
        assert!(matches!(err, TextError::Parse { ref locale, .. } if locale == "xx"));
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |key: &str| format!("<{key}>");
        assert_eq!(resolver.lookup("A"), "<A>");
    }
}
