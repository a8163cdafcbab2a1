//! Dashboard aggregates served by the backend's `/stats` endpoint.

use serde::{Deserialize, Serialize};

/// Documents ingested on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    pub count: u64,
}

/// Corpus-wide counters for the dashboard.
///
/// `platforms` keeps the backend's key order (the chart renders its
/// segments in insertion order), so it stays a raw JSON map here and is
/// only flattened into typed pairs on access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub vectors: u64,
    #[serde(default)]
    pub documents: u64,
    #[serde(default)]
    pub platforms: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelinePoint>,
}

impl DashboardStats {
    /// Platform counts in the backend's order.
    pub fn platform_counts(&self) -> Vec<(String, u64)> {
        self.platforms
            .iter()
            .map(|(name, count)| (name.clone(), count.as_u64().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_counts_preserve_backend_order() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"vectors": 100, "documents": 7, "platforms": {"web": 5, "pdf": 2}}"#,
        )
        .unwrap();
        assert_eq!(
            stats.platform_counts(),
            vec![("web".to_string(), 5), ("pdf".to_string(), 2)]
        );
    }

    #[test]
    fn timeline_is_optional() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"vectors": 0, "documents": 0, "platforms": {}}"#).unwrap();
        assert!(stats.timeline.is_empty());
        assert!(stats.platform_counts().is_empty());
    }
}
