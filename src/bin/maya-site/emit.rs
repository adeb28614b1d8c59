use std::path;

use maya_site::Format;
use maya_site::HostConfig;

use crate::args;
use crate::error::*;

/// Write the site and sidebar records in the host's serialization
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct EmitArgs {
    /// Serialization to produce (json, yaml, toml)
    #[arg(short, long, value_name = "FORMAT", default_value = "json", value_parser = parse_format)]
    format: Format,

    /// Write `docusaurus.config.*` and `sidebars.*` here instead of stdout
    #[arg(long, value_name = "DIR")]
    destination: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

fn parse_format(value: &str) -> Result<Format, String> {
    value.parse()
}

impl EmitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        maya_site_config::ensure_valid(&config.site, &config.sidebars)?;

        match self.destination.as_deref() {
            Some(dest) => {
                let written =
                    maya_site::write_host_files(dest, &config.site, &config.sidebars, self.format)?;
                for path in written {
                    info!("Wrote {}", path.display());
                }
            }
            None => {
                let host = HostConfig::new(&config.site, &config.sidebars);
                print!("{}", maya_site::render(&host, self.format)?);
            }
        }

        Ok(())
    }
}
