use std::fmt;

use crate::I18n;
use crate::LinkCheckPolicy;
use crate::Presets;
use crate::ThemeConfig;

/// Site settings for the current calendar year.
pub fn site_settings() -> SiteConfig {
    SiteConfig::with_year(current_year())
}

/// Calendar year (UTC) stamped into the footer.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Site identity, addressing, locale and theme.
///
/// Serializes with the host's field names (`baseUrl`, `onBrokenLinks`,
/// `themeConfig`, ...). Fields omitted from a project file keep the values
/// of [`site_settings`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub favicon: String,
    pub future: Future,
    pub url: String,
    pub base_url: String,
    pub on_broken_links: LinkCheckPolicy,
    pub i18n: I18n,
    pub presets: Presets,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    pub fn with_year(year: i32) -> Self {
        Self {
            title: "Майя".to_owned(),
            tagline: "Анализ проекта Personal AI".to_owned(),
            favicon: "img/favicon.ico".to_owned(),
            future: Future::default(),
            url: "https://maya-docs.example.com".to_owned(),
            base_url: "/".to_owned(),
            on_broken_links: LinkCheckPolicy::Throw,
            i18n: I18n::default(),
            presets: Presets::default(),
            theme_config: ThemeConfig::with_year(year),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        site_settings()
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Opt-ins for behavior of the host's next major version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Future {
    pub v4: bool,
}

impl Default for Future {
    fn default() -> Self {
        Self { v4: true }
    }
}
