#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    pub color_mode: ColorMode,
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: Prism,
    pub table_of_contents: TableOfContents,
}

impl ThemeConfig {
    pub fn with_year(year: i32) -> Self {
        Self {
            color_mode: Default::default(),
            navbar: Default::default(),
            footer: Footer::with_year(year),
            prism: Default::default(),
            table_of_contents: Default::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::with_year(crate::current_year())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ColorMode {
    pub default_mode: Mode,
    /// Hide the light/dark toggle from readers.
    pub disable_switch: bool,
    /// Follow the reader's system preference instead of `default_mode`.
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            default_mode: Mode::Dark,
            disable_switch: false,
            respect_prefers_color_scheme: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Navbar {
    pub title: String,
    pub items: Vec<NavbarItem>,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            title: "Майя".to_owned(),
            items: vec![NavbarItem::doc_sidebar(
                crate::MAIN_SIDEBAR,
                NavbarPosition::Left,
                "Документация",
            )],
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavbarItemKind {
    #[default]
    DocSidebar,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// A navbar link that opens a sidebar by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavbarItem {
    #[serde(rename = "type", default)]
    pub kind: NavbarItemKind,
    pub sidebar_id: String,
    #[serde(default)]
    pub position: NavbarPosition,
    pub label: String,
}

impl NavbarItem {
    pub fn doc_sidebar(sidebar_id: &str, position: NavbarPosition, label: &str) -> Self {
        Self {
            kind: NavbarItemKind::DocSidebar,
            sidebar_id: sidebar_id.to_owned(),
            position,
            label: label.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    pub style: FooterStyle,
    pub copyright: String,
}

impl Footer {
    pub fn with_year(year: i32) -> Self {
        Self {
            style: FooterStyle::Dark,
            copyright: copyright(year),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::with_year(crate::current_year())
    }
}

/// Footer copyright line for the given calendar year.
pub fn copyright(year: i32) -> String {
    format!("Анализ чата Ma-ya #13 • {year}")
}

/// Syntax-highlighting theme names, one per color mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Prism {
    pub theme: String,
    pub dark_theme: String,
}

impl Default for Prism {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: "dracula".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct TableOfContents {
    pub min_heading_level: u8,
    pub max_heading_level: u8,
}

impl TableOfContents {
    /// Heading levels the host accepts for either bound.
    pub const LEVELS: std::ops::RangeInclusive<u8> = 2..=6;

    pub fn is_ordered(&self) -> bool {
        self.min_heading_level <= self.max_heading_level
    }
}

impl Default for TableOfContents {
    fn default() -> Self {
        Self {
            min_heading_level: 2,
            max_heading_level: 4,
        }
    }
}
