use serde::{Deserialize, Serialize};

use super::DocumentId;

/// One projected document in the 2-D embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub index: DocumentId,
    #[serde(rename = "MDS1")]
    pub mds1: f64,
    #[serde(rename = "MDS2")]
    pub mds2: f64,
}

impl Point {
    pub fn new(index: impl Into<DocumentId>, mds1: f64, mds2: f64) -> Self {
        Self {
            index: index.into(),
            mds1,
            mds2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_uses_mds_field_names() -> anyhow::Result<()> {
        let points: Vec<Point> = serde_json::from_str(
            r#"[{"index":"a.txt","MDS1":0,"MDS2":0},{"index":"b.txt","MDS1":5.5,"MDS2":-2}]"#,
        )?;

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new("a.txt", 0.0, 0.0));
        assert_eq!(points[1].mds1, 5.5);
        assert_eq!(points[1].mds2, -2.0);

        let json = serde_json::to_value(&points[1])?;
        assert_eq!(json["MDS1"], 5.5);
        assert_eq!(json["index"], "b.txt");
        Ok(())
    }
}
