use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints each sidebar tree in display order
    Sidebars {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the document ids found in the docs directory
    Docs {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Sidebars { config } => {
                let config = config.load_config()?;
                for (name, tree) in config.sidebars.iter() {
                    println!("{name}:");
                    for entry in tree {
                        println!("  {}\t{}", entry.id, entry.label);
                    }
                }
            }
            Self::Docs { config: config_args } => {
                let config = config_args.load_config()?;
                let docs = config_args.docs_path(&config);
                let source = maya_site_core::Source::docs(&docs)?;
                let index = maya_site_core::DocIndex::from_source(&source)?;
                for doc in index.iter() {
                    println!("{}\t{}", doc.id, doc.source.rel_path);
                }
            }
        }

        Ok(())
    }
}
