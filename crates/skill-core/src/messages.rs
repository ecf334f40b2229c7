//! Localized message bundles.
//!
//! Two static bundles (`en`, `zh`) embedded at compile time, flat key-value
//! JSON. Lookup falls back requested -> en -> the key itself, so a missing
//! translation never panics.

use crate::locale::Locale;
use std::collections::HashMap;

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const ZH_BUNDLE: &str = include_str!("../locales/zh.json");

/// Message formatter for one resolved locale.
#[derive(Debug)]
pub struct Messages {
    locale: Locale,
    bundle: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        let raw = match locale {
            Locale::En => EN_BUNDLE,
            Locale::Zh => ZH_BUNDLE,
        };
        Self {
            locale,
            bundle: parse_bundle(raw),
            fallback: parse_bundle(EN_BUNDLE),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Looks up a message, falling back to the `en` bundle and finally to the
    /// key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.bundle
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(key, String::as_str)
    }

    /// Looks up a message and substitutes `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.get(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

fn parse_bundle(raw: &str) -> HashMap<String, String> {
    // Bundles are embedded and covered by tests; a parse failure degrades to
    // key-as-message rather than aborting.
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundles_parse() {
        assert!(!parse_bundle(EN_BUNDLE).is_empty());
        assert!(!parse_bundle(ZH_BUNDLE).is_empty());
    }

    #[test]
    fn bundles_cover_the_same_keys() {
        let en = parse_bundle(EN_BUNDLE);
        let zh = parse_bundle(ZH_BUNDLE);

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn zh_lookup_differs_from_en() {
        let en = Messages::new(Locale::En);
        let zh = Messages::new(Locale::Zh);

        assert_eq!(en.get("skills.empty"), "No skills found.");
        assert_ne!(zh.get("skills.empty"), en.get("skills.empty"));
    }

    #[test]
    fn unknown_key_returns_the_key() {
        let messages = Messages::new(Locale::Zh);
        assert_eq!(messages.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn format_substitutes_placeholders() {
        let messages = Messages::new(Locale::En);
        let out = messages.format("skill.enabled", &[("file", "commit.md")]);
        assert_eq!(out, "Enabled skill: commit.md");
    }

    #[test]
    fn format_with_count() {
        let messages = Messages::new(Locale::En);
        let out = messages.format("skills.installed", &[("count", "3")]);
        assert_eq!(out, "Installed 3 skill(s)");
    }

    #[test]
    fn locale_accessor_reports_requested_locale() {
        assert_eq!(Messages::new(Locale::Zh).locale(), Locale::Zh);
    }
}
