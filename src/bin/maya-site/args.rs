use std::env;
use std::io::Write as _;
use std::path;

use maya_site_config::Config;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: maya-site.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,

    /// Docs directory the sidebar ids resolve against [default: docs]
    #[arg(short, long, value_name = "DIR")]
    docs: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            Config::from_file(config_path).with_context(|| {
                format!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Could not read current directory")?;
            Config::from_cwd(cwd)?
        };
        Ok(config)
    }

    /// The content store, `--docs` taking precedence over the project file.
    pub(crate) fn docs_path(&self, config: &Config) -> path::PathBuf {
        self.docs.clone().unwrap_or_else(|| config.docs_path())
    }
}

pub(crate) fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.init();
}
