use std::fmt;

use maya_site_config::LinkCheckPolicy;
use maya_site_config::Sidebars;
use maya_site_config::SiteConfig;

use crate::DocIndex;
use crate::Result;
use crate::Status;

/// A sidebar entry whose document identifier has no document behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub sidebar: String,
    pub id: String,
    pub label: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sidebar `{}` entry `{}` ({}) does not resolve to a document",
            self.sidebar, self.id, self.label
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub checked: usize,
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

/// Resolve every sidebar reference under the site's `onBrokenLinks` policy.
pub fn check_links(site: &SiteConfig, sidebars: &Sidebars, docs: &DocIndex) -> Result<LinkReport> {
    check_links_with(site.on_broken_links, sidebars, docs)
}

pub fn check_links_with(
    policy: LinkCheckPolicy,
    sidebars: &Sidebars,
    docs: &DocIndex,
) -> Result<LinkReport> {
    let mut report = LinkReport::default();
    for (name, tree) in sidebars.iter() {
        for entry in tree {
            report.checked += 1;
            if docs.contains(&entry.id) {
                log::trace!("{name}: `{}` resolved", entry.id);
                continue;
            }
            report.broken.push(BrokenLink {
                sidebar: name.to_owned(),
                id: entry.id.clone(),
                label: entry.label.clone(),
            });
        }
    }

    match policy {
        LinkCheckPolicy::Ignore => {
            for broken in &report.broken {
                log::debug!("{broken}");
            }
        }
        LinkCheckPolicy::Warn => {
            for broken in &report.broken {
                log::warn!("{broken}");
            }
        }
        LinkCheckPolicy::Throw => {
            if !report.is_clean() {
                for broken in &report.broken {
                    log::error!("{broken}");
                }
                let ids = report
                    .broken
                    .iter()
                    .map(|b| b.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(Status::new("Broken sidebar links").context_with(|c| {
                    c.insert("Policy", policy.to_string())
                        .insert("Ids", ids.clone())
                }));
            }
        }
    }

    Ok(report)
}
