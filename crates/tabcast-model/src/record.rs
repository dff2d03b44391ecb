//! Label-keyed output records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::TypedValue;

/// One output row: label/value pairs in schema column order.
///
/// Serialization must not re-sort the keys, so this is a pair list rather
/// than a map; lookups are linear, which is fine at schema widths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, TypedValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append the value under `label`, or replace an existing one in
    /// place. Replacement keeps the original position so repeated labels
    /// cannot reorder output.
    pub fn insert(&mut self, label: impl Into<String>, value: TypedValue) {
        let label = label.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == label) {
            slot.1 = value;
        } else {
            self.fields.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&TypedValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Label/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
