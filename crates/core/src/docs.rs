use std::collections::BTreeMap;

use crate::Result;
use crate::Source;
use crate::SourcePath;
use crate::Status;

/// File extensions the host renders as documents.
pub const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// A page in the content store, addressed by its document identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: Option<String>,
    pub source: SourcePath,
}

/// The subset of a document's front matter that affects addressing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
struct DocFrontmatter {
    id: Option<String>,
    title: Option<String>,
}

/// Every document in a docs directory, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocIndex {
    docs: BTreeMap<String, Document>,
}

impl DocIndex {
    pub fn from_source(source: &Source) -> Result<Self> {
        let mut index = Self::default();
        for path in source.iter() {
            let is_doc = path
                .extension()
                .map(|ext| DOC_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if !is_doc {
                log::trace!("{}: not a document", path.rel_path);
                continue;
            }
            let content = std::fs::read_to_string(&path.abs_path).map_err(|e| {
                Status::new("Failed to read document")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.abs_path.display().to_string()))
            })?;
            let doc = Document::parse(path, &content)?;
            index.insert(doc)?;
        }
        log::debug!(
            "Indexed {} documents under {}",
            index.len(),
            source.root().display()
        );
        Ok(index)
    }

    pub fn insert(&mut self, doc: Document) -> Result<()> {
        if let Some(existing) = self.docs.get(&doc.id) {
            return Err(Status::new("Duplicate document id").context_with(|c| {
                c.insert("Id", doc.id.clone())
                    .insert("First", existing.source.rel_path.to_string())
                    .insert("Second", doc.source.rel_path.to_string())
            }));
        }
        self.docs.insert(doc.id.clone(), doc);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl Document {
    /// Derive the identifier from the file's location and front matter.
    ///
    /// The identifier is the document's directory joined with either the
    /// front matter `id` or the file stem. Numeric ordering prefixes such as
    /// `01-` are dropped from directory names and stems.
    pub fn parse(source: SourcePath, content: &str) -> Result<Self> {
        let front = split_document(content)
            .map(|front| parse_frontmatter(front, &source))
            .transpose()?
            .unwrap_or_default();

        let name = match front.id {
            Some(id) => {
                if id.contains('/') {
                    return Err(Status::new("Document id may not contain `/`").context_with(|c| {
                        c.insert("Id", id.clone())
                            .insert("Path", source.rel_path.to_string())
                    }));
                }
                id
            }
            None => {
                let stem = source.stem().unwrap_or_default();
                strip_number_prefix(stem).to_owned()
            }
        };

        let mut parts: Vec<&str> = source.dirs().map(strip_number_prefix).collect();
        parts.push(&name);
        let id = parts.join("/");

        Ok(Self {
            id,
            title: front.title,
            source,
        })
    }
}

fn parse_frontmatter(front: &str, source: &SourcePath) -> Result<DocFrontmatter> {
    let front: DocFrontmatter = serde_yaml::from_str(front).map_err(|e| {
        Status::new("Failed to parse frontmatter")
            .with_source(e)
            .context_with(|c| c.insert("Path", source.rel_path.to_string()))
    })?;
    Ok(front)
}

static FRONT_MATTER: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::RegexBuilder::new(r"\A---\s*\r?\n([\s\S]*?\n)?---\s*(\r?\n|\z)")
        .build()
        .expect("front matter pattern is valid")
});

fn split_document(content: &str) -> Option<&str> {
    let captures = FRONT_MATTER.captures(content)?;
    let front = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    if front.trim().is_empty() {
        None
    } else {
        Some(front)
    }
}

static NUMBER_PREFIX: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^\d+\s*[-_.]+\s*([^-_.\s].*)$").expect("number prefix pattern is valid")
});

/// Dates (`2024-01-15-notes`) and versions (`1.2.3-release`, `v2_0`) are part
/// of the name, not an ordering prefix.
static KEPT_PREFIX: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    let date = r"(?:\d{2}|\d{4})[-_.]\d{2}(?:[-_.](?:\d{2}|\d{4}))?";
    let version = r"v?\d+[-_.]\d+(?:[-_.]\d+)?";
    regex::Regex::new(&format!("^(?:{date}|{version})")).expect("kept prefix pattern is valid")
});

/// `01-methodology` orders the file without changing its identifier.
pub fn strip_number_prefix(name: &str) -> &str {
    if KEPT_PREFIX.is_match(name) {
        return name;
    }
    NUMBER_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(name)
}
