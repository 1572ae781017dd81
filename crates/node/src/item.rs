use serde::{Deserialize, Serialize};

/// One unit of input data flowing through the node.
///
/// Created by the host before dispatch, never mutated by the node, and
/// consumed to produce exactly one [`OutputRecord`] — success or error —
/// per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque payload. The dispatcher never reads it; parameters are
    /// resolved by the host against the item's index instead.
    #[serde(default)]
    pub json: serde_json::Value,
}

impl Item {
    /// Create an item carrying the given payload.
    #[must_use]
    pub fn new(json: serde_json::Value) -> Self {
        Self { json }
    }

    /// An item with an empty object payload.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            json: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Back-reference pairing an output record to the input item it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    /// Index of the originating input item.
    pub item: usize,
}

/// One output record per input item, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Response payload on success, `{"error": ...}` payload on failure
    /// in continue-on-fail mode.
    pub json: serde_json::Value,

    /// Pairing back to the input item.
    #[serde(rename = "pairedItem")]
    pub paired_item: PairedItem,
}

impl OutputRecord {
    /// Create a record pairing `json` to the item at `index`.
    #[must_use]
    pub fn new(json: serde_json::Value, index: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item: index },
        }
    }
}
