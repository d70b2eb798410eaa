use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const DEFAULT_LANGUAGE_CODE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub native_name: Cow<'static, str>,
    pub flag: Cow<'static, str>,
}

impl Language {
    const fn new(
        code: &'static str,
        name: &'static str,
        native_name: &'static str,
        flag: &'static str,
    ) -> Self {
        Language {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
            native_name: Cow::Borrowed(native_name),
            flag: Cow::Borrowed(flag),
        }
    }
}

pub static SUPPORTED_LANGUAGES: [Language; 10] = [
    Language::new("en", "English", "English", "🇺🇸"),
    Language::new("hi", "Hindi", "हिन्दी", "🇮🇳"),
    Language::new("bn", "Bengali", "বাংলা", "🇮🇳"),
    Language::new("te", "Telugu", "తెలుగు", "🇮🇳"),
    Language::new("mr", "Marathi", "मराठी", "🇮🇳"),
    Language::new("ta", "Tamil", "தமிழ்", "🇮🇳"),
    Language::new("gu", "Gujarati", "ગુજરાતી", "🇮🇳"),
    Language::new("kn", "Kannada", "ಕನ್ನಡ", "🇮🇳"),
    Language::new("ml", "Malayalam", "മലയാളം", "🇮🇳"),
    Language::new("pa", "Punjabi", "ਪੰਜਾਬੀ", "🇮🇳"),
];

pub fn default_language() -> &'static Language {
    &SUPPORTED_LANGUAGES[0]
}

pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}

/// English name of a language, used when instructing the model.
/// Unknown codes resolve to English.
pub fn language_name(code: &str) -> &'static str {
    find_language(code)
        .map(|l| &*l.name)
        .unwrap_or("English")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(default_language().code, DEFAULT_LANGUAGE_CODE);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_language("ta").unwrap().native_name, "தமிழ்");
        assert!(find_language("fr").is_none());
        assert!(is_supported("pa"));
    }

    #[test]
    fn test_language_name_defaults_to_english() {
        assert_eq!(language_name("hi"), "Hindi");
        assert_eq!(language_name("xx"), "English");
    }

    #[test]
    fn test_catalog_codes_unique() {
        let mut codes: Vec<_> = SUPPORTED_LANGUAGES.iter().map(|l| l.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
    }
}
