use maya_site_config::LinkCheckPolicy;

use crate::args;
use crate::error::*;

/// Validate the configuration and resolve every sidebar entry against the docs
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Override the configured `onBrokenLinks` policy
    #[arg(long, value_name = "POLICY", value_parser = parse_policy)]
    policy: Option<LinkCheckPolicy>,

    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

fn parse_policy(value: &str) -> Result<LinkCheckPolicy, String> {
    value.parse()
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let mut config = self.config.load_config()?;
        if let Some(policy) = self.policy {
            debug!("Overriding link-check policy with `{policy}`");
            config.site.on_broken_links = policy;
        }

        maya_site_config::ensure_valid(&config.site, &config.sidebars)?;

        let docs = self.config.docs_path(&config);
        info!("Resolving sidebar entries against {}", docs.display());
        let source = maya_site_core::Source::docs(&docs)?;
        let index = maya_site_core::DocIndex::from_source(&source)?;
        let report = maya_site_core::check_links(&config.site, &config.sidebars, &index)?;

        println!(
            "{} sidebar entries checked, {} broken ({} policy)",
            report.checked,
            report.broken.len(),
            config.site.on_broken_links
        );
        Ok(())
    }
}
