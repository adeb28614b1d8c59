use relative_path::RelativePathBuf;
use serde::ser::SerializeSeq as _;

/// Options for the host's bundled presets.
///
/// The host takes presets as a list of `[name, options]` pairs, so that is
/// the serialized form: `[["classic", {...}]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Presets {
    pub classic: ClassicPreset,
}

impl Presets {
    pub const CLASSIC: &'static str = "classic";
}

impl serde::Serialize for Presets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(1))?;
        seq.serialize_element(&(Self::CLASSIC, &self.classic))?;
        seq.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum PresetName {
    Classic,
}

impl<'de> serde::Deserialize<'de> for Presets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<(PresetName, ClassicPreset)> =
            serde::Deserialize::deserialize(deserializer)?;
        let mut presets = Self::default();
        let mut seen = false;
        for (name, options) in entries {
            match name {
                PresetName::Classic => {
                    if seen {
                        return Err(serde::de::Error::custom(format!(
                            "preset `{}` listed more than once",
                            Self::CLASSIC
                        )));
                    }
                    seen = true;
                    presets.classic = options;
                }
            }
        }
        Ok(presets)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ClassicPreset {
    pub docs: DocsPreset,
    /// The blog feature is switched off for this site.
    pub blog: bool,
    pub theme: ThemePreset,
}

impl Default for ClassicPreset {
    fn default() -> Self {
        Self {
            docs: Default::default(),
            blog: false,
            theme: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct DocsPreset {
    pub sidebar_path: RelativePathBuf,
    /// Docs are served from the site root rather than `/docs`.
    pub route_base_path: String,
}

impl Default for DocsPreset {
    fn default() -> Self {
        Self {
            sidebar_path: RelativePathBuf::from("./sidebars.ts"),
            route_base_path: "/".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemePreset {
    pub custom_css: RelativePathBuf,
}

impl Default for ThemePreset {
    fn default() -> Self {
        Self {
            custom_css: RelativePathBuf::from("./src/css/custom.css"),
        }
    }
}
