use std::fmt;

use crate::Result;
use crate::SidebarTree;
use crate::Sidebars;
use crate::SiteConfig;
use crate::Status;
use crate::TableOfContents;

/// A structural problem in the site or sidebar records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UnknownSidebar { label: String, sidebar_id: String },
    DuplicateDocId { sidebar: String, id: String },
    EmptySidebar { sidebar: String },
    EmptyLabel { sidebar: String, id: String },
    NoLocales,
    DefaultLocaleMissing { default_locale: String },
    DuplicateLocale { locale: String },
    HeadingLevelsInverted { min: u8, max: u8 },
    HeadingLevelOutOfRange { level: u8 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSidebar { label, sidebar_id } => write!(
                f,
                "navbar item `{label}` references unknown sidebar `{sidebar_id}`"
            ),
            Self::DuplicateDocId { sidebar, id } => {
                write!(f, "sidebar `{sidebar}` lists document `{id}` more than once")
            }
            Self::EmptySidebar { sidebar } => write!(f, "sidebar `{sidebar}` has no entries"),
            Self::EmptyLabel { sidebar, id } => {
                write!(f, "sidebar `{sidebar}` entry `{id}` has an empty label")
            }
            Self::NoLocales => write!(f, "no locales declared"),
            Self::DefaultLocaleMissing { default_locale } => write!(
                f,
                "default locale `{default_locale}` is not among the declared locales"
            ),
            Self::DuplicateLocale { locale } => {
                write!(f, "locale `{locale}` is declared more than once")
            }
            Self::HeadingLevelsInverted { min, max } => write!(
                f,
                "table of contents min heading level {min} exceeds max heading level {max}"
            ),
            Self::HeadingLevelOutOfRange { level } => write!(
                f,
                "table of contents heading level {level} is outside {}..={}",
                TableOfContents::LEVELS.start(),
                TableOfContents::LEVELS.end()
            ),
        }
    }
}

/// Collect every structural violation across both records.
pub fn validate(site: &SiteConfig, sidebars: &Sidebars) -> Vec<Violation> {
    let mut violations = Vec::new();

    for item in &site.theme_config.navbar.items {
        if !sidebars.contains(&item.sidebar_id) {
            violations.push(Violation::UnknownSidebar {
                label: item.label.clone(),
                sidebar_id: item.sidebar_id.clone(),
            });
        }
    }

    for (name, tree) in sidebars.iter() {
        validate_tree(name, tree, &mut violations);
    }

    let i18n = &site.i18n;
    if i18n.locales.is_empty() {
        violations.push(Violation::NoLocales);
    } else if !i18n.contains_default() {
        violations.push(Violation::DefaultLocaleMissing {
            default_locale: i18n.default_locale.clone(),
        });
    }
    for locale in i18n.duplicate_locales() {
        violations.push(Violation::DuplicateLocale {
            locale: locale.to_owned(),
        });
    }

    let toc = &site.theme_config.table_of_contents;
    for level in [toc.min_heading_level, toc.max_heading_level] {
        if !TableOfContents::LEVELS.contains(&level) {
            violations.push(Violation::HeadingLevelOutOfRange { level });
        }
    }
    if !toc.is_ordered() {
        violations.push(Violation::HeadingLevelsInverted {
            min: toc.min_heading_level,
            max: toc.max_heading_level,
        });
    }

    violations
}

fn validate_tree(name: &str, tree: &SidebarTree, violations: &mut Vec<Violation>) {
    if tree.is_empty() {
        violations.push(Violation::EmptySidebar {
            sidebar: name.to_owned(),
        });
    }
    for id in tree.duplicate_ids() {
        violations.push(Violation::DuplicateDocId {
            sidebar: name.to_owned(),
            id: id.to_owned(),
        });
    }
    for entry in tree {
        if entry.label.trim().is_empty() {
            violations.push(Violation::EmptyLabel {
                sidebar: name.to_owned(),
                id: entry.id.clone(),
            });
        }
    }
}

/// Fail with every violation listed when the records are inconsistent.
pub fn ensure_valid(site: &SiteConfig, sidebars: &Sidebars) -> Result<()> {
    let violations = validate(site, sidebars);
    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        log::error!("{violation}");
    }
    let listing = violations
        .iter()
        .map(|v| format!("  {v}"))
        .collect::<Vec<_>>()
        .join("\n");
    Err(Status::new("Invalid site configuration")
        .context_with(|c| c.insert("Violations", format!("\n{listing}"))))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NavbarItem;
    use crate::NavbarPosition;
    use crate::SidebarEntry;
    use crate::MAIN_SIDEBAR;

    fn fixture() -> (SiteConfig, Sidebars) {
        (SiteConfig::with_year(2025), crate::sidebars())
    }

    #[test]
    fn builtin_records_valid() {
        let (site, sidebars) = fixture();
        assert!(validate(&site, &sidebars).is_empty());
        assert!(ensure_valid(&site, &sidebars).is_ok());
    }

    #[test]
    fn unknown_navbar_sidebar() {
        let (mut site, sidebars) = fixture();
        site.theme_config.navbar.items.push(NavbarItem::doc_sidebar(
            "apiSidebar",
            NavbarPosition::Right,
            "API",
        ));
        assert_eq!(
            validate(&site, &sidebars),
            vec![Violation::UnknownSidebar {
                label: "API".to_owned(),
                sidebar_id: "apiSidebar".to_owned(),
            }]
        );
    }

    #[test]
    fn duplicate_doc_id() {
        let (site, mut sidebars) = fixture();
        let tree = [
            SidebarEntry::doc("projects", "Проекты"),
            SidebarEntry::doc("projects", "Проекты снова"),
        ]
        .into_iter()
        .collect();
        sidebars.insert(MAIN_SIDEBAR, tree);
        assert_eq!(
            validate(&site, &sidebars),
            vec![Violation::DuplicateDocId {
                sidebar: MAIN_SIDEBAR.to_owned(),
                id: "projects".to_owned(),
            }]
        );
    }

    #[test]
    fn empty_sidebar_and_label() {
        let (site, mut sidebars) = fixture();
        sidebars.insert("extra", SidebarTree::default());
        sidebars.insert(
            MAIN_SIDEBAR,
            [SidebarEntry::doc("projects", " ")].into_iter().collect(),
        );
        let violations = validate(&site, &sidebars);
        assert!(violations.contains(&Violation::EmptySidebar {
            sidebar: "extra".to_owned()
        }));
        assert!(violations.contains(&Violation::EmptyLabel {
            sidebar: MAIN_SIDEBAR.to_owned(),
            id: "projects".to_owned(),
        }));
    }

    #[test]
    fn default_locale_missing() {
        let (mut site, sidebars) = fixture();
        site.i18n.locales = vec!["en".to_owned()];
        assert_eq!(
            validate(&site, &sidebars),
            vec![Violation::DefaultLocaleMissing {
                default_locale: "ru".to_owned()
            }]
        );

        site.i18n.locales.clear();
        assert_eq!(validate(&site, &sidebars), vec![Violation::NoLocales]);
    }

    #[test]
    fn duplicate_locale() {
        let (mut site, sidebars) = fixture();
        site.i18n.locales = vec!["ru".to_owned(), "en".to_owned(), "ru".to_owned()];
        assert_eq!(
            validate(&site, &sidebars),
            vec![Violation::DuplicateLocale {
                locale: "ru".to_owned()
            }]
        );
        assert!(ensure_valid(&site, &sidebars).is_err());
    }

    #[test]
    fn heading_levels() {
        let (mut site, sidebars) = fixture();
        site.theme_config.table_of_contents.min_heading_level = 5;
        site.theme_config.table_of_contents.max_heading_level = 3;
        assert_eq!(
            validate(&site, &sidebars),
            vec![Violation::HeadingLevelsInverted { min: 5, max: 3 }]
        );

        site.theme_config.table_of_contents.min_heading_level = 1;
        site.theme_config.table_of_contents.max_heading_level = 7;
        assert_eq!(
            validate(&site, &sidebars),
            vec![
                Violation::HeadingLevelOutOfRange { level: 1 },
                Violation::HeadingLevelOutOfRange { level: 7 },
            ]
        );
    }

    #[test]
    fn ensure_valid_lists_violations() {
        let (mut site, sidebars) = fixture();
        site.i18n.default_locale = "en".to_owned();
        let err = ensure_valid(&site, &sidebars).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid site configuration"), "{message}");
    }
}
