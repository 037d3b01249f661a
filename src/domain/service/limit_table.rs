use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Resource limits keyed by limit name, in insertion order.
///
/// Output line order follows this order, so it is never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitTable {
    entries: Vec<(String, String)>,
}

impl LimitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a limit. An existing name keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for LimitTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = LimitTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

/// Limit values are text, but spec files commonly write plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLimitValue {
    Text(String),
    Number(u64),
}

impl From<RawLimitValue> for String {
    fn from(value: RawLimitValue) -> Self {
        match value {
            RawLimitValue::Text(text) => text,
            RawLimitValue::Number(number) => number.to_string(),
        }
    }
}

struct LimitTableVisitor;

impl<'de> Visitor<'de> for LimitTableVisitor {
    type Value = LimitTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of limit names to values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = LimitTable::new();
        while let Some((name, value)) = map.next_entry::<String, RawLimitValue>()? {
            table.insert(name, value);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for LimitTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LimitTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let table: LimitTable = [("rss", "1024"), ("nofile", "4096"), ("core", "0")].into_iter().collect();
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["rss", "nofile", "core"]);
    }

    #[test]
    fn reinsert_replaces_value_in_place() {
        let mut table = LimitTable::new();
        table.insert("nofile", "1024");
        table.insert("core", "0");
        table.insert("nofile", "unlimited");

        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().next(), Some(("nofile", "unlimited")));
    }

    #[test]
    fn deserializes_yaml_in_document_order() {
        let table: LimitTable =
            serde_yaml::from_str("nproc: 512\nnofile: unlimited\ncore: \"0\"\n").unwrap();
        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("nproc", "512"), ("nofile", "unlimited"), ("core", "0")]);
    }

    #[test]
    fn deserializes_toml_in_document_order() {
        #[derive(Deserialize)]
        struct Wrapper {
            ulimit: LimitTable,
        }

        let wrapper: Wrapper =
            toml::from_str("[ulimit]\nstack = 8192\nas = \"unlimited\"\n").unwrap();
        assert_eq!(wrapper.ulimit.get("stack"), Some("8192"));
        let names: Vec<&str> = wrapper.ulimit.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["stack", "as"]);
    }
}
