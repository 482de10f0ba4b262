//! Converts one host UI node into its flat snapshot record.

use serde_json::Value;
use tracing::debug;

use uiscope_core::{
    CollectionRecord, ExtraValue, NodeError, NodeFlag, SelectionMode, SnapshotRecord, UiNode,
};

/// Extract the fixed attribute schema from one node.
///
/// An `Unreadable` attribute degrades the whole node to the empty record
/// rather than aborting the traversal; `Invalidated` propagates and fails
/// the current request.
pub fn extract_record(node: &dyn UiNode) -> Result<SnapshotRecord, NodeError> {
    match read_record(node) {
        Ok(record) => Ok(record),
        Err(NodeError::Unreadable(reason)) => {
            debug!(%reason, "degrading unreadable node to empty record");
            Ok(SnapshotRecord::empty())
        }
        Err(err) => Err(err),
    }
}

fn read_record(node: &dyn UiNode) -> Result<SnapshotRecord, NodeError> {
    let mut record = SnapshotRecord {
        class_name: node.class_name()?,
        text: node.text()?,
        content_description: node.content_description()?,
        view_id_resource_name: node.view_id_resource_name()?,
        extra_data: node.available_extra_data()?,
        ..SnapshotRecord::default()
    };

    for (key, value) in node.extras()? {
        record.extras.insert(key, coerce_extra(value));
    }

    for flag in NodeFlag::CANONICAL {
        if node.has_flag(flag)? {
            record.flags.push(flag.as_str().to_string());
        }
    }

    record.collection_info = node.collection_info()?.map(|info| CollectionRecord {
        column_count: info.column_count,
        row_count: info.row_count,
        hierarchical: info.hierarchical,
        selection_mode: SelectionMode::from_raw(info.selection_mode),
    });
    record.collection_item_info = node.collection_item_info()?;
    record.bounds = Some(node.bounds_in_screen()?.to_array());

    Ok(record)
}

/// Best-effort structural coercion of one extras value to JSON.
///
/// Primitives pass through. A float JSON cannot carry (NaN, infinity)
/// degrades to its string form, as does anything the host left opaque.
fn coerce_extra(value: ExtraValue) -> Value {
    match value {
        ExtraValue::Bool(b) => Value::Bool(b),
        ExtraValue::Int(n) => Value::from(n),
        ExtraValue::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        ExtraValue::Text(s) => Value::String(s),
        ExtraValue::IntList(ns) => Value::Array(ns.into_iter().map(Value::from).collect()),
        ExtraValue::TextList(ss) => Value::Array(ss.into_iter().map(Value::String).collect()),
        ExtraValue::Opaque(s) => Value::String(s),
    }
}
