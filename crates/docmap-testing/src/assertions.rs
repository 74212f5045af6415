//! Assertions over the `--format json` envelope.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Parse stdout of a `--format json` run.
pub fn parse_envelope(stdout: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(stdout).context("stdout is not UTF-8")?;
    serde_json::from_str(text).context("stdout is not a JSON document")
}

/// Cluster names in output order.
pub fn cluster_names(json: &Value) -> Result<Vec<String>> {
    let clusters = json["content"]["clusters"]
        .as_array()
        .context("Expected 'content.clusters' array in JSON")?;

    clusters
        .iter()
        .enumerate()
        .map(|(i, c)| {
            c["name"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Cluster {} missing name", i))
        })
        .collect()
}

pub fn assert_cluster_files(json: &Value, cluster: &str, expected: &[&str]) -> Result<()> {
    let clusters = json["content"]["clusters"]
        .as_array()
        .context("Expected 'content.clusters' array in JSON")?;

    let entry = clusters
        .iter()
        .find(|c| c["name"] == cluster)
        .with_context(|| format!("Cluster {} not in output", cluster))?;

    let files: Vec<&str> = entry["files"]
        .as_array()
        .with_context(|| format!("Cluster {} has no files array", cluster))?
        .iter()
        .filter_map(Value::as_str)
        .collect();

    if files != expected {
        bail!("Cluster {} lists {:?}, expected {:?}", cluster, files, expected);
    }
    Ok(())
}

pub fn assert_point_count(json: &Value, expected: usize) -> Result<()> {
    let points = json["content"]["points"]
        .as_array()
        .context("Expected 'content.points' array in JSON")?;

    if points.len() != expected {
        bail!("Expected {} points, got {}", expected, points.len());
    }
    Ok(())
}

/// Count of suggestions; the field is omitted when there are none.
pub fn suggestion_count(json: &Value) -> usize {
    json["suggestions"].as_array().map_or(0, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_helpers() {
        let json = json!({
            "content": { "clusters": [
                { "name": "C1", "files": ["a.txt"] },
                { "name": "C2", "files": [] }
            ]}
        });

        assert_eq!(cluster_names(&json).unwrap(), vec!["C1", "C2"]);
        assert!(assert_cluster_files(&json, "C1", &["a.txt"]).is_ok());
        assert!(assert_cluster_files(&json, "C2", &["x.txt"]).is_err());
        assert!(assert_cluster_files(&json, "C9", &[]).is_err());
        assert_eq!(suggestion_count(&json), 0);
    }
}
