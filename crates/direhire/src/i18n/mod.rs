//! Display-string dictionary for the storefront.
//!
//! Keys are a closed [`MessageKey`] enum and each locale table is an
//! exhaustive `match`, so a key without a translation fails to compile.
//! Lookups by raw string fall back to the key itself.

mod en;
mod hi;
mod keys;
pub mod router;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use keys::MessageKey;
pub use router::locale_router;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Hi,
    En,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Hi => "hi",
            Locale::En => "en",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hi" | "hi-in" => Some(Self::Hi),
            "en" | "en-us" | "en-in" => Some(Self::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Key → label lookup bound to one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn message(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::Hi => hi::lookup(key),
            Locale::En => en::lookup(key),
        }
    }

    /// Label for `key`, or `key` unchanged when it is not in the dictionary.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match MessageKey::from_key(key) {
            Some(known) => self.message(known),
            None => key,
        }
    }

    pub fn dictionary(&self) -> BTreeMap<&'static str, &'static str> {
        MessageKey::ALL
            .iter()
            .map(|key| (key.as_str(), self.message(*key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        let translator = Translator::new(Locale::En);
        assert_eq!(translator.t("filters.doesNotExist"), "filters.doesNotExist");
        assert_eq!(translator.t(""), "");
    }

    #[test]
    fn locales_resolve_the_same_key_differently() {
        assert_eq!(Translator::new(Locale::En).t("filters.title"), "Filters");
        assert_eq!(Translator::new(Locale::Hi).t("filters.title"), "फ़िल्टर");
        assert_eq!(
            Translator::new(Locale::En).t("auth.dontHaveAccount"),
            "Don't have an account?"
        );
    }

    #[test]
    fn every_key_round_trips_through_its_string_form() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn dictionary_lists_every_key() {
        let dictionary = Translator::default().dictionary();
        assert_eq!(dictionary.len(), MessageKey::ALL.len());
        assert_eq!(dictionary.get("services.carpenter"), Some(&"बढ़ई"));
    }

    #[test]
    fn locale_parsing_is_lenient() {
        assert_eq!(Locale::parse(" EN "), Some(Locale::En));
        assert_eq!(Locale::parse("hi-IN"), Some(Locale::Hi));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::default(), Locale::Hi);
    }
}
