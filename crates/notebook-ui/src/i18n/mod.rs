//! Translations for the notebook UI.
//!
//! # Design
//! - Each locale ships a JSON file compiled into the binary.
//! - Files are flattened to dotted keys once, when a bundle is built.
//! - Lookups fall back to English, then to the caller's default.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Languages the UI ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// Arabic.
    Ar,
    /// German.
    De,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

#[derive(Clone, Copy)]
struct LocaleInfo {
    code: &'static str,
    label: &'static str,
    source: &'static str,
}

impl LocaleCode {
    /// Locales in picker order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Ar, Self::De, Self::En, Self::Es, Self::Fr]
    }

    const fn info(self) -> LocaleInfo {
        match self {
            Self::Ar => LocaleInfo {
                code: "ar",
                label: "العربية",
                source: include_str!("../../i18n/ar.json"),
            },
            Self::De => LocaleInfo {
                code: "de",
                label: "Deutsch",
                source: include_str!("../../i18n/de.json"),
            },
            Self::En => LocaleInfo {
                code: "en",
                label: "English",
                source: include_str!("../../i18n/en.json"),
            },
            Self::Es => LocaleInfo {
                code: "es",
                label: "Español",
                source: include_str!("../../i18n/es.json"),
            },
            Self::Fr => LocaleInfo {
                code: "fr",
                label: "Français",
                source: include_str!("../../i18n/fr.json"),
            },
        }
    }

    /// Two-letter language code, also the stored preference value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.info().code
    }

    /// Native name shown in the language picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.info().label
    }

    /// Match a BCP 47 tag such as `fr-CA` or `pt_BR` by its language subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next()?;
        Self::all()
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(language))
    }
}

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Flattened strings for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale the strings belong to.
    pub locale: LocaleCode,
    entries: Arc<BTreeMap<String, String>>,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

static ENGLISH: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

impl TranslationBundle {
    /// Parse the bundled JSON for `locale`. A file that fails to parse
    /// yields an empty bundle, so every lookup falls back to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree = serde_json::from_str::<Value>(locale.info().source).unwrap_or(Value::Null);
        let rtl = matches!(tree.pointer("/meta/rtl"), Some(Value::Bool(true)));
        let mut entries = BTreeMap::new();
        flatten("", &tree, &mut entries);
        Self {
            locale,
            entries: Arc::new(entries),
            rtl,
        }
    }

    /// Text for a dotted key such as `notes.title`.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        self.lookup(key)
            .or_else(|| ENGLISH.lookup(key))
            .unwrap_or(default)
            .to_string()
    }

    /// Whether the locale is written right to left.
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn flatten(prefix: &str, node: &Value, out: &mut BTreeMap<String, String>) {
    match node {
        Value::Object(children) => {
            for (name, child) in children {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&key, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
        assert_eq!(bundle.text("notes.create", "Create"), "Créer");
    }

    #[test]
    fn missing_locale_key_falls_back_to_english() {
        let bundle = TranslationBundle::new(LocaleCode::De);
        assert_eq!(
            bundle.text("notes.empty_body", ""),
            "Try a different title or fewer tags."
        );
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn only_string_leaves_become_keys() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("meta.rtl", "none"), "none");
        assert_eq!(bundle.text("notes", "none"), "none");
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("notes.title", "").is_empty());
            assert!(!bundle.text("tags.modal_title", "").is_empty());
        }
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("es_MX"), Some(LocaleCode::Es));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("ja-JP"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }
}
