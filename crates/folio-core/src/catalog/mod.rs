//! Project catalog
//!
//! The catalog is static configuration: an ordered list of projects keyed by
//! the `data-id` their cards carry in the document. Controllers only read it.

mod record;

pub use record::{ProjectId, ProjectLinks, ProjectRecord};

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// One catalog entry as it appears in the catalog JSON
#[derive(Clone, Debug, Deserialize)]
struct CatalogEntry {
    id: ProjectId,
    #[serde(flatten)]
    record: ProjectRecord,
}

/// Ordered mapping from project id to record
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Records in insertion order
    entries: Vec<(ProjectId, ProjectRecord)>,
    /// Id -> position in `entries`
    index: HashMap<ProjectId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON form (an array of entries)
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).map_err(FolioError::Catalog)?;
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry.id, entry.record)?;
        }
        Ok(catalog)
    }

    /// Append a project, rejecting duplicate ids
    pub fn insert(&mut self, id: ProjectId, record: ProjectRecord) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(FolioError::DuplicateProject(id));
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, record));
        Ok(())
    }

    /// Look up a project by id
    pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    /// Look up a project, treating absence as an error
    pub fn require(&self, id: &ProjectId) -> Result<&ProjectRecord> {
        self.get(id).ok_or_else(|| FolioError::UnknownProject(id.clone()))
    }

    /// Check whether a project exists
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate projects in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &ProjectRecord)> {
        self.entries.iter().map(|(id, record)| (id, record))
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "ACNH",
            "title": "Museum Tracker",
            "description": "Tracks museum progress.",
            "links": { "github": "g1", "info": "i1", "web": "w1" }
        },
        {
            "id": "Kibble",
            "title": "Kibble Up",
            "description": "Kibble recipes.",
            "links": { "github": "g2", "info": "i2", "web": "w2" }
        }
    ]"#;

    #[test]
    fn test_catalog_from_json_preserves_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["ACNH", "Kibble"]);

        let kibble = catalog.get(&ProjectId::from("Kibble")).unwrap();
        assert_eq!(kibble.title, "Kibble Up");
        assert_eq!(kibble.links.web, "w2");
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let json = r#"[
            {"id": "A", "title": "a", "description": "", "links": {"github": "", "info": "", "web": ""}},
            {"id": "A", "title": "b", "description": "", "links": {"github": "", "info": "", "web": ""}}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateProject(id) if id.as_str() == "A"));
    }

    #[test]
    fn test_catalog_malformed_json() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, FolioError::Catalog(_)));
    }

    #[test]
    fn test_catalog_require_unknown() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.require(&ProjectId::from("ACNH")).is_ok());
        assert!(matches!(
            catalog.require(&ProjectId::from("Nope")),
            Err(FolioError::UnknownProject(_))
        ));
        assert!(!catalog.contains(&ProjectId::from("Nope")));
    }
}
