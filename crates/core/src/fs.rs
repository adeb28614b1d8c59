use relative_path::RelativePath;
use relative_path::RelativePathBuf;

/// A file inside the content store, known both on disk and relative to the
/// store's root.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SourcePath {
    pub abs_path: std::path::PathBuf,
    pub rel_path: RelativePathBuf,
}

impl SourcePath {
    pub fn from_root(root: &std::path::Path, path: &std::path::Path) -> Option<Self> {
        let abs_path = path.to_owned();
        let rel_path = path.strip_prefix(root).ok()?;
        let rel_path = RelativePathBuf::from_path(rel_path).ok()?;
        Some(Self { abs_path, rel_path })
    }

    pub fn extension(&self) -> Option<&str> {
        self.rel_path.extension()
    }

    pub fn stem(&self) -> Option<&str> {
        self.rel_path.file_stem()
    }

    /// Directory names between the root and the file.
    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.rel_path
            .parent()
            .map(RelativePath::components)
            .into_iter()
            .flatten()
            .filter_map(|c| match c {
                relative_path::Component::Normal(name) => Some(name),
                _ => None,
            })
    }
}
