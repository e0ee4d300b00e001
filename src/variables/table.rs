/*!
 * Insertion-ordered variable table.
 *
 * Keys keep first-seen order so the persisted JSON lists variables in the
 * order they were discovered in the document.
 */

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of looking up a placeholder name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Known name with a non-empty value
    Bound(&'a str),
    /// Known name whose value is still empty
    Unbound,
    /// Unknown name, now registered with an empty value
    Discovered,
}

/// Mapping from placeholder name to replacement text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Set a value, keeping the original position of an existing key
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Look up `name`, registering it with an empty value when unknown.
    ///
    /// This is the only place a lookup mutates the table.
    pub fn resolve_or_register(&mut self, name: &str) -> Resolution<'_> {
        match self.positions.get(name).copied() {
            Some(position) => {
                let value = self.entries[position].1.as_str();
                if value.is_empty() {
                    Resolution::Unbound
                } else {
                    Resolution::Bound(value)
                }
            }
            None => {
                self.insert(name, "");
                Resolution::Discovered
            }
        }
    }

    /// Names whose value is still empty, in table order
    pub fn unbound_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl Serialize for VariableTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct VariableTableVisitor;

impl<'de> Visitor<'de> for VariableTableVisitor {
    type Value = VariableTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of variable names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = VariableTable::new();
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            table.insert(name, value);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for VariableTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VariableTableVisitor)
    }
}
