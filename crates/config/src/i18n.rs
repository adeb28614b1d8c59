use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct I18n {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl I18n {
    pub fn single(locale: &str) -> Self {
        Self {
            default_locale: locale.to_owned(),
            locales: vec![locale.to_owned()],
        }
    }

    pub fn contains_default(&self) -> bool {
        self.locales.iter().any(|l| *l == self.default_locale)
    }

    /// Locales declared more than once, each reported once.
    pub fn duplicate_locales(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.as_str()).duplicates().collect()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::single("ru")
    }
}
