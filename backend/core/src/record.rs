//! The serialized wire representation of one UI node and its subtree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{CollectionItemInfo, SelectionMode};

/// One node of the snapshot document.
///
/// Absence convention: every optional or empty field is omitted from the
/// serialized object rather than emitted as null or an empty sequence. A
/// leaf node has no `children` key, a flagless node has no `flags` key, and
/// the degraded/empty record serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id_resource_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_data: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extras: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_info: Option<CollectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_item_info: Option<CollectionItemInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[i32; 4]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotRecord>,
}

impl SnapshotRecord {
    /// The degraded form a node falls back to when its attributes cannot
    /// be read: an empty object.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of nodes in this record's subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SnapshotRecord::node_count).sum::<usize>()
    }
}

/// Collection semantics on the wire, with the selection mode already
/// resolved to its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub column_count: i32,
    pub row_count: i32,
    pub hierarchical: bool,
    pub selection_mode: SelectionMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record_serializes_to_empty_object() {
        let value = serde_json::to_value(SnapshotRecord::empty()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn empty_fields_are_omitted_not_null() {
        let record = SnapshotRecord {
            class_name: Some("Button".to_string()),
            bounds: Some([0, 0, 1, 1]),
            ..SnapshotRecord::default()
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value, json!({"className": "Button", "bounds": [0, 0, 1, 1]}));
    }

    #[test]
    fn selection_mode_serializes_as_lowercase_tag() {
        let record = CollectionRecord {
            column_count: 2,
            row_count: 3,
            hierarchical: false,
            selection_mode: SelectionMode::Multiple,
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["selectionMode"], "multiple");
    }

    #[test]
    fn node_count_is_recursive() {
        let leaf = SnapshotRecord::default();
        let parent = SnapshotRecord {
            children: vec![leaf.clone(), leaf],
            ..SnapshotRecord::default()
        };
        assert_eq!(parent.node_count(), 3);
    }
}
