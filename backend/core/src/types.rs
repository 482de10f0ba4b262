//! Attribute value types shared between the host seam and the serializer.

use serde::{Deserialize, Serialize};

/// On-screen rectangle of a node in device pixels. Host values are passed
/// through as-is; this layer performs no clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Wire form: `[left, top, width, height]`.
    pub fn to_array(self) -> [i32; 4] {
        [self.left, self.top, self.width, self.height]
    }
}

/// Boolean UI-state predicates a node can expose.
///
/// `CANONICAL` fixes the order flags appear in on the wire. The host
/// evaluates each predicate independently; several commonly co-occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeFlag {
    AccessibilityFocused,
    Checkable,
    Checked,
    Clickable,
    ContentInvalid,
    ContextClickable,
    Dismissable,
    Editable,
    Enabled,
    Focusable,
    Focused,
    ImportantForAccessibility,
    LongClickable,
    Multiline,
    Password,
    Scrollable,
    Selected,
    VisibleToUser,
    ShowingHintText,
}

impl NodeFlag {
    /// Emission order for the `flags` sequence.
    pub const CANONICAL: [NodeFlag; 19] = [
        NodeFlag::AccessibilityFocused,
        NodeFlag::Checkable,
        NodeFlag::Checked,
        NodeFlag::Clickable,
        NodeFlag::ContentInvalid,
        NodeFlag::ContextClickable,
        NodeFlag::Dismissable,
        NodeFlag::Editable,
        NodeFlag::Enabled,
        NodeFlag::Focusable,
        NodeFlag::Focused,
        NodeFlag::ImportantForAccessibility,
        NodeFlag::LongClickable,
        NodeFlag::Multiline,
        NodeFlag::Password,
        NodeFlag::Scrollable,
        NodeFlag::Selected,
        NodeFlag::VisibleToUser,
        NodeFlag::ShowingHintText,
    ];

    /// Wire tag for this flag.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeFlag::AccessibilityFocused => "accessibilityFocused",
            NodeFlag::Checkable => "checkable",
            NodeFlag::Checked => "checked",
            NodeFlag::Clickable => "clickable",
            NodeFlag::ContentInvalid => "contentInvalid",
            NodeFlag::ContextClickable => "contextClickable",
            NodeFlag::Dismissable => "dismissable",
            NodeFlag::Editable => "editable",
            NodeFlag::Enabled => "enabled",
            NodeFlag::Focusable => "focusable",
            NodeFlag::Focused => "focused",
            NodeFlag::ImportantForAccessibility => "importantForAccessibility",
            NodeFlag::LongClickable => "longClickable",
            NodeFlag::Multiline => "multiline",
            NodeFlag::Password => "password",
            NodeFlag::Scrollable => "scrollable",
            NodeFlag::Selected => "selected",
            NodeFlag::VisibleToUser => "visibleToUser",
            NodeFlag::ShowingHintText => "showingHintText",
        }
    }
}

/// A value from the host's arbitrary key/value extras bundle.
///
/// Closed set of shapes the host can type; anything else arrives
/// pre-stringified as `Opaque`. Conversion to JSON is best-effort and
/// lossy, never a full serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    Opaque(String),
}

/// Grid/list container semantics of a node, as reported by the host.
/// `selection_mode` carries the raw host value; see [`SelectionMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionInfo {
    pub column_count: i32,
    pub row_count: i32,
    pub hierarchical: bool,
    pub selection_mode: i32,
}

/// Position of a node within a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionItemInfo {
    pub column_index: i32,
    pub column_span: i32,
    pub row_index: i32,
    pub row_span: i32,
    pub heading: bool,
    pub selected: bool,
}

/// Selection mode of a collection, resolved from the raw host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    None,
    Single,
    Multiple,
}

impl SelectionMode {
    /// Deterministic 3-way resolution: `1` is single, `2` is multiple,
    /// any other host value maps to none. Exactly one tag per collection.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => SelectionMode::Single,
            2 => SelectionMode::Multiple,
            _ => SelectionMode::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::None => "none",
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
        }
    }
}
