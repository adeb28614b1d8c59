use indexmap::IndexMap;
use itertools::Itertools;

/// Identifier of the only sidebar this site declares.
pub const MAIN_SIDEBAR: &str = "mainSidebar";

const MAIN_SIDEBAR_ENTRIES: [(&str, &str); 7] = [
    ("methodology", "Методология анализа"),
    ("chat-participants", "Участники чата"),
    ("projects", "Проекты"),
    ("vision-evolution", "Эволюция концепции"),
    ("positions-by-participant", "Позиции участников"),
    ("positions-evolution", "Хронология позиций"),
    ("positions-matrix", "Матрица позиций"),
];

/// The navigation trees handed to the host, keyed by sidebar identifier.
pub fn sidebars() -> Sidebars {
    let main = MAIN_SIDEBAR_ENTRIES
        .iter()
        .map(|(id, label)| SidebarEntry::doc(id, label))
        .collect();
    let mut sidebars = Sidebars::new();
    sidebars.insert(MAIN_SIDEBAR, main);
    sidebars
}

/// Sidebar trees in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Sidebars {
    trees: IndexMap<String, SidebarTree>,
}

impl Sidebars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacing an existing tree keeps its position.
    pub fn insert(&mut self, name: &str, tree: SidebarTree) -> Option<SidebarTree> {
        self.trees.insert(name.to_owned(), tree)
    }

    pub fn get(&self, name: &str) -> Option<&SidebarTree> {
        self.trees.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SidebarTree)> {
        self.trees.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Ordered document references; the order is the order readers see.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SidebarTree {
    entries: Vec<SidebarEntry>,
}

impl SidebarTree {
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SidebarEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.ids().duplicates().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SidebarEntry> for SidebarTree {
    fn from_iter<I: IntoIterator<Item = SidebarEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SidebarTree {
    type Item = &'a SidebarEntry;
    type IntoIter = std::slice::Iter<'a, SidebarEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarEntryKind {
    #[default]
    Doc,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SidebarEntry {
    #[serde(rename = "type", default)]
    pub kind: SidebarEntryKind,
    /// Document identifier in the content store.
    pub id: String,
    pub label: String,
}

impl SidebarEntry {
    pub fn doc(id: &str, label: &str) -> Self {
        Self {
            kind: SidebarEntryKind::Doc,
            id: id.to_owned(),
            label: label.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn main_sidebar_order() {
        let sidebars = sidebars();
        assert_eq!(sidebars.names().collect::<Vec<_>>(), vec![MAIN_SIDEBAR]);

        let main = sidebars.get(MAIN_SIDEBAR).unwrap();
        let actual: Vec<_> = main.iter().map(|e| (e.id.as_str(), e.label.as_str())).collect();
        assert_eq!(
            actual,
            vec![
                ("methodology", "Методология анализа"),
                ("chat-participants", "Участники чата"),
                ("projects", "Проекты"),
                ("vision-evolution", "Эволюция концепции"),
                ("positions-by-participant", "Позиции участников"),
                ("positions-evolution", "Хронология позиций"),
                ("positions-matrix", "Матрица позиций"),
            ]
        );
    }

    #[test]
    fn main_sidebar_ids_unique() {
        let sidebars = sidebars();
        let main = sidebars.get(MAIN_SIDEBAR).unwrap();
        assert!(main.duplicate_ids().is_empty());
    }

    #[test]
    fn duplicate_ids_reported_once() {
        let tree: SidebarTree = [
            SidebarEntry::doc("a", "A"),
            SidebarEntry::doc("b", "B"),
            SidebarEntry::doc("a", "A again"),
            SidebarEntry::doc("a", "A thrice"),
        ]
        .into_iter()
        .collect();
        assert_eq!(tree.duplicate_ids(), vec!["a"]);
    }

    #[test]
    fn entry_host_names() {
        let entry = SidebarEntry::doc("projects", "Projects");
        let actual = serde_yaml::to_string(&entry).unwrap();
        assert_eq!(actual, "type: doc\nid: projects\nlabel: Projects\n");
    }

    #[test]
    fn sidebars_deserialize_preserves_order() {
        let yaml = "\
mainSidebar:
- type: doc
  id: zeta
  label: Zeta
- id: alpha
  label: Alpha
";
        let sidebars: Sidebars = serde_yaml::from_str(yaml).unwrap();
        let main = sidebars.get(MAIN_SIDEBAR).unwrap();
        assert_eq!(main.ids().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(main.entries()[1].kind, SidebarEntryKind::Doc);
    }

    #[test]
    fn sidebars_keep_declaration_order() {
        let yaml = "\
zetaSidebar:
- id: zeta
  label: Zeta
alphaSidebar:
- id: alpha
  label: Alpha
";
        let mut sidebars: Sidebars = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            sidebars.names().collect::<Vec<_>>(),
            vec!["zetaSidebar", "alphaSidebar"]
        );

        sidebars.insert("betaSidebar", SidebarTree::default());
        sidebars.insert("zetaSidebar", SidebarTree::default());
        assert_eq!(
            sidebars.names().collect::<Vec<_>>(),
            vec!["zetaSidebar", "alphaSidebar", "betaSidebar"]
        );

        let rendered = serde_yaml::to_string(&sidebars).unwrap();
        assert!(rendered.starts_with("zetaSidebar:"), "{rendered}");
    }
}
