//! Global variable table - structural value interning.
//!
//! Bulky structural values (layout records, text styles, fill lists, stroke
//! records, effect lists) repeat heavily across a design tree. Instead of
//! inlining them into every node, the walker routes each one through this
//! table and stores only a short reference id on the node. Within one run no
//! two entries are structurally equal; every duplicate collapses to a single
//! entry shared by reference.
//!
//! A table lives for exactly one traversal. Ids are only unique within their
//! table, so tables must never be shared or merged across runs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::extractors::base::types::{
    LayoutRecord, SimplifiedEffect, SimplifiedFill, StrokeRecord, TextStyleRecord,
};

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 6;

/// Human-readable id prefix, one per structural value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariablePrefix {
    Layout,
    TextStyle,
    Fill,
    Stroke,
    Effect,
}

impl VariablePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariablePrefix::Layout => "layout",
            VariablePrefix::TextStyle => "style",
            VariablePrefix::Fill => "fill",
            VariablePrefix::Stroke => "stroke",
            VariablePrefix::Effect => "effect",
        }
    }
}

impl std::fmt::Display for VariablePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One interned structural value.
///
/// Serializes untagged; the table entry looks exactly like the record
/// itself. The kind is recovered from the id prefix on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Layout(LayoutRecord),
    TextStyle(TextStyleRecord),
    Fills(Vec<SimplifiedFill>),
    Stroke(StrokeRecord),
    Effects(Vec<SimplifiedEffect>),
}

/// Per-run mapping from generated variable id to interned structural value.
#[derive(Debug, Clone, Default)]
pub struct GlobalVariableTable {
    entries: BTreeMap<String, VariableValue>,
    next_id: u64,
}

impl GlobalVariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of a structurally identical existing entry, or insert
    /// `value` under a freshly generated id.
    ///
    /// Dedup is a deep-equality linear scan over all entries. O(n²) across a
    /// run, fine at design-tree sizes; a content-hash keyed lookup would be
    /// a drop-in replacement with identical observable behavior.
    pub fn intern(&mut self, value: VariableValue, prefix: VariablePrefix) -> String {
        if let Some(id) = self
            .entries
            .iter()
            .find(|(_, existing)| **existing == value)
            .map(|(id, _)| id.clone())
        {
            return id;
        }

        let id = format!("{}_{}", prefix, encode_id(self.next_id));
        self.next_id += 1;
        self.entries.insert(id.clone(), value);
        id
    }

    pub fn get(&self, id: &str) -> Option<&VariableValue> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Equality is over entries only; the id counter is bookkeeping.
impl PartialEq for GlobalVariableTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Serialize for GlobalVariableTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GlobalVariableTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(deserializer)?;
        let mut entries = BTreeMap::new();
        for (id, value) in raw {
            let kind = id.split('_').next().unwrap_or_default();
            let parsed = match kind {
                "layout" => VariableValue::Layout(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                "style" => VariableValue::TextStyle(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                "fill" => VariableValue::Fills(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                "stroke" => VariableValue::Stroke(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                "effect" => VariableValue::Effects(
                    serde_json::from_value(value).map_err(D::Error::custom)?,
                ),
                other => {
                    return Err(D::Error::custom(format!(
                        "unknown variable id prefix: {other}"
                    )))
                }
            };
            entries.insert(id, parsed);
        }
        let next_id = entries.len() as u64;
        Ok(Self { entries, next_id })
    }
}

/// Render a counter value as six lowercase base-36 characters.
///
/// Counter-based generation keeps the documented `prefix_xxxxxx` id shape
/// while guaranteeing uniqueness within a table by construction; ids are
/// still not stable across runs over differing inputs.
fn encode_id(mut n: u64) -> String {
    let mut buf = [ID_ALPHABET[0]; ID_LEN];
    for slot in buf.iter_mut().rev() {
        *slot = ID_ALPHABET[(n % 36) as usize];
        n /= 36;
    }
    buf.iter().map(|byte| *byte as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(x: f64) -> VariableValue {
        VariableValue::Layout(LayoutRecord {
            x: Some(x),
            y: Some(0.0),
            ..Default::default()
        })
    }

    #[test]
    fn interning_equal_values_reuses_the_id() {
        let mut table = GlobalVariableTable::new();
        let first = table.intern(layout(1.0), VariablePrefix::Layout);
        let second = table.intern(layout(1.0), VariablePrefix::Layout);

        assert_eq!(first, second);
        assert_eq!(table.len(), 1, "second intern must not grow the table");
    }

    #[test]
    fn interning_is_order_independent_for_equal_values() {
        let mut table = GlobalVariableTable::new();
        let a1 = table.intern(layout(1.0), VariablePrefix::Layout);
        let _b = table.intern(layout(2.0), VariablePrefix::Layout);
        let a2 = table.intern(layout(1.0), VariablePrefix::Layout);

        assert_eq!(a1, a2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn distinct_values_get_distinct_ids() {
        let mut table = GlobalVariableTable::new();
        let a = table.intern(layout(1.0), VariablePrefix::Layout);
        let b = table.intern(layout(2.0), VariablePrefix::Layout);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_carry_prefix_and_six_char_suffix() {
        let mut table = GlobalVariableTable::new();
        let id = table.intern(layout(1.0), VariablePrefix::Layout);

        let (prefix, suffix) = id.split_once('_').unwrap();
        assert_eq!(prefix, "layout");
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn counter_ids_never_collide() {
        // Unlike unchecked random generation, the monotonic counter cannot
        // produce a duplicate id, so uniqueness holds by construction.
        let mut table = GlobalVariableTable::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            let id = table.intern(layout(i as f64), VariablePrefix::Layout);
            assert!(seen.insert(id), "id generated twice");
        }
        assert_eq!(table.len(), 100);
    }

    #[test]
    fn table_round_trips_through_json() {
        let mut table = GlobalVariableTable::new();
        table.intern(layout(4.0), VariablePrefix::Layout);
        table.intern(
            VariableValue::Fills(vec![SimplifiedFill {
                fill_type: "SOLID".into(),
                color: Some(crate::raw::Color {
                    r: 1.0,
                    g: 0.0,
                    b: 0.0,
                    a: 1.0,
                }),
                opacity: None,
                gradient_stops: None,
            }]),
            VariablePrefix::Fill,
        );

        let text = serde_json::to_string(&table).unwrap();
        let back: GlobalVariableTable = serde_json::from_str(&text).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn encode_id_is_zero_padded_base36() {
        assert_eq!(encode_id(0), "000000");
        assert_eq!(encode_id(35), "00000z");
        assert_eq!(encode_id(36), "000010");
    }
}
