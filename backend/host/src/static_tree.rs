//! Fixture-backed UI tree provider.
//!
//! A [`NodeSpec`] tree mirrors the node attribute schema and deserializes
//! from JSON, so a recorded hierarchy can stand in for a live platform
//! accessibility subsystem.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use uiscope_core::{
    Bounds, CollectionInfo, CollectionItemInfo, ExtraValue, NodeError, NodeFlag, UiNode,
    UiTreeProvider,
};

/// One node of a fixture tree. All fields default, so fixtures only spell
/// out what they care about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSpec {
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub view_id_resource_name: Option<String>,
    pub extra_data: Vec<String>,
    pub extras: Map<String, Value>,
    pub flags: Vec<NodeFlag>,
    pub collection_info: Option<CollectionInfo>,
    pub collection_item_info: Option<CollectionItemInfo>,
    pub bounds: Bounds,
    pub children: Vec<NodeSpec>,
}

/// Serves a fixed [`NodeSpec`] tree as the current UI hierarchy.
pub struct StaticTreeProvider {
    root: Option<NodeSpec>,
}

impl StaticTreeProvider {
    pub fn new(root: NodeSpec) -> Self {
        Self { root: Some(root) }
    }

    /// A host with no addressable foreground window.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Load a fixture tree from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open tree fixture {}", path.display()))?;
        let root: NodeSpec = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse tree fixture {}", path.display()))?;
        Ok(Self::new(root))
    }
}

#[async_trait]
impl UiTreeProvider for StaticTreeProvider {
    async fn current_root(&self) -> Result<Option<Box<dyn UiNode>>, NodeError> {
        Ok(self
            .root
            .as_ref()
            .map(|spec| Box::new(StaticNode(Arc::new(spec.clone()))) as Box<dyn UiNode>))
    }
}

/// A handle onto one fixture node. Dropping it is the release.
struct StaticNode(Arc<NodeSpec>);

impl UiNode for StaticNode {
    fn class_name(&self) -> Result<Option<String>, NodeError> {
        Ok(self.0.class_name.clone())
    }

    fn text(&self) -> Result<Option<String>, NodeError> {
        Ok(self.0.text.clone())
    }

    fn content_description(&self) -> Result<Option<String>, NodeError> {
        Ok(self.0.content_description.clone())
    }

    fn view_id_resource_name(&self) -> Result<Option<String>, NodeError> {
        Ok(self.0.view_id_resource_name.clone())
    }

    fn available_extra_data(&self) -> Result<Vec<String>, NodeError> {
        Ok(self.0.extra_data.clone())
    }

    fn extras(&self) -> Result<Vec<(String, ExtraValue)>, NodeError> {
        Ok(self
            .0
            .extras
            .iter()
            .map(|(key, value)| (key.clone(), value_to_extra(value)))
            .collect())
    }

    fn has_flag(&self, flag: NodeFlag) -> Result<bool, NodeError> {
        Ok(self.0.flags.contains(&flag))
    }

    fn collection_info(&self) -> Result<Option<CollectionInfo>, NodeError> {
        Ok(self.0.collection_info)
    }

    fn collection_item_info(&self) -> Result<Option<CollectionItemInfo>, NodeError> {
        Ok(self.0.collection_item_info)
    }

    fn bounds_in_screen(&self) -> Result<Bounds, NodeError> {
        Ok(self.0.bounds)
    }

    fn children(&self) -> Result<Vec<Box<dyn UiNode>>, NodeError> {
        Ok(self
            .0
            .children
            .iter()
            .map(|child| Box::new(StaticNode(Arc::new(child.clone()))) as Box<dyn UiNode>)
            .collect())
    }
}

/// Map a fixture JSON value onto the closed set of host extras shapes.
/// Shapes outside the set arrive as their stringified `Opaque` form.
fn value_to_extra(value: &Value) -> ExtraValue {
    match value {
        Value::Bool(b) => ExtraValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ExtraValue::Int(i)
            } else {
                ExtraValue::Float(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => ExtraValue::Text(s.clone()),
        Value::Array(items) => {
            if let Some(ints) = items
                .iter()
                .map(Value::as_i64)
                .collect::<Option<Vec<i64>>>()
            {
                ExtraValue::IntList(ints)
            } else if let Some(texts) = items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
            {
                ExtraValue::TextList(texts)
            } else {
                ExtraValue::Opaque(value.to_string())
            }
        }
        other => ExtraValue::Opaque(other.to_string()),
    }
}
