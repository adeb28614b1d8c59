use std::fmt;
use std::path;
use std::str::FromStr;

use anyhow::Context as _;

use maya_site_config::Sidebars;
use maya_site_config::SiteConfig;

use crate::Result;

/// Serialization handed to the documentation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl Format {
    pub const VARIANTS: [&'static str; 3] = ["json", "yaml", "toml"];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yml",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(format!(
                "unknown format `{s}`, expected one of: {}",
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// Both records as one document.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct HostConfig<'a> {
    pub config: &'a SiteConfig,
    pub sidebars: &'a Sidebars,
}

impl<'a> HostConfig<'a> {
    pub fn new(config: &'a SiteConfig, sidebars: &'a Sidebars) -> Self {
        Self { config, sidebars }
    }
}

pub fn render<T: serde::Serialize + ?Sized>(value: &T, format: Format) -> Result<String> {
    let mut rendered = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Toml => toml::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// File name the host loads the site record from.
pub fn site_file_name(format: Format) -> String {
    format!("docusaurus.config.{}", format.extension())
}

/// File name the host loads the sidebar trees from.
pub fn sidebars_file_name(format: Format) -> String {
    format!("sidebars.{}", format.extension())
}

/// Write the site and sidebar records into `dest`, one file each.
///
/// The written site record's `sidebarPath` names the sidebars file written
/// beside it.
pub fn write_host_files(
    dest: &path::Path,
    site: &SiteConfig,
    sidebars: &Sidebars,
    format: Format,
) -> Result<Vec<path::PathBuf>> {
    std::fs::create_dir_all(dest)
        .with_context(|| format!("Could not create {}", dest.display()))?;

    let sidebars_name = sidebars_file_name(format);
    let mut site = site.clone();
    site.presets.classic.docs.sidebar_path = format!("./{sidebars_name}").into();

    let files = [
        (dest.join(site_file_name(format)), render(&site, format)?),
        (dest.join(sidebars_name), render(sidebars, format)?),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        std::fs::write(&path, content)
            .with_context(|| format!("Could not write {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
