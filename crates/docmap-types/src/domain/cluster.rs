use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use super::DocumentId;

/// Files grouped under one clustering label, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub files: Vec<DocumentId>,
}

impl Cluster {
    pub fn new(files: impl IntoIterator<Item = impl Into<DocumentId>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cluster name → cluster, keeping the key order of the source document.
///
/// Serialized as a JSON object; the order of keys is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSet {
    clusters: Vec<(String, Cluster)>,
}

impl ClusterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cluster. A repeated name replaces the earlier entry in place.
    pub fn insert(&mut self, name: impl Into<String>, cluster: Cluster) {
        let name = name.into();
        if let Some(slot) = self.clusters.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = cluster;
        } else {
            self.clusters.push((name, cluster));
        }
    }

    pub fn with_cluster(mut self, name: impl Into<String>, cluster: Cluster) -> Self {
        self.insert(name, cluster);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cluster)| cluster)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cluster)> {
        self.clusters.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clusters.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// All document identifiers in display order
    pub fn document_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.clusters.iter().flat_map(|(_, c)| c.files.iter())
    }

    /// Identifiers that appear more than once across the whole set.
    ///
    /// Each duplicate is reported once, in order of its second occurrence.
    pub fn duplicate_documents(&self) -> Vec<DocumentId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for id in self.document_ids() {
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id.clone());
            }
        }

        duplicates
    }
}

impl Serialize for ClusterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.clusters.len()))?;
        for (name, cluster) in &self.clusters {
            map.serialize_entry(name, cluster)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClusterSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ClusterSetVisitor)
    }
}

struct ClusterSetVisitor;

impl<'de> Visitor<'de> for ClusterSetVisitor {
    type Value = ClusterSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of cluster name to { files: [...] }")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = ClusterSet::new();
        while let Some((name, cluster)) = access.next_entry::<String, Cluster>()? {
            set.insert(name, cluster);
        }
        Ok(set)
    }
}

impl FromIterator<(String, Cluster)> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = (String, Cluster)>>(iter: I) -> Self {
        let mut set = ClusterSet::new();
        for (name, cluster) in iter {
            set.insert(name, cluster);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_key_order() -> anyhow::Result<()> {
        let json = r#"{
            "zeta": {"files": ["z1.txt"]},
            "alpha": {"files": ["a1.txt", "a2.txt"]},
            "mid": {"files": []}
        }"#;

        let set: ClusterSet = serde_json::from_str(json)?;
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            set.get("alpha").map(|c| c.files.len()),
            Some(2),
            "alpha should keep both files"
        );
        Ok(())
    }

    #[test]
    fn test_serialize_round_trips_order() -> anyhow::Result<()> {
        let set = ClusterSet::new()
            .with_cluster("C2", Cluster::new(["b.txt"]))
            .with_cluster("C1", Cluster::new(["a.txt"]));

        let json = serde_json::to_string(&set)?;
        assert_eq!(json, r#"{"C2":{"files":["b.txt"]},"C1":{"files":["a.txt"]}}"#);
        Ok(())
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let result: Result<ClusterSet, _> = serde_json::from_str(r#"["C1"]"#);
        assert!(result.is_err());

        let result: Result<ClusterSet, _> = serde_json::from_str(r#"{"C1": {"files": 3}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_documents_reported_once() {
        let set = ClusterSet::new()
            .with_cluster("C1", Cluster::new(["a.txt", "b.txt"]))
            .with_cluster("C2", Cluster::new(["a.txt", "c.txt", "a.txt", "b.txt"]));

        let dups = set.duplicate_documents();
        assert_eq!(dups, vec![DocumentId::from("a.txt"), DocumentId::from("b.txt")]);
    }

    #[test]
    fn test_document_ids_follow_display_order() {
        let set = ClusterSet::new()
            .with_cluster("C1", Cluster::new(["a.txt", "b.txt"]))
            .with_cluster("C2", Cluster::new(["c.txt"]));

        let ids: Vec<&str> = set.document_ids().map(DocumentId::as_str).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
