// src/strategy/schema.rs
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Travel times keyed by transport mode, in insertion order.
///
/// Rankings break ties by the order entries were first inserted, so the
/// dataset keeps that order explicitly instead of relying on a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingDataset {
    entries: Vec<(String, u32)>,
}

impl RankingDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the minutes for a label.
    ///
    /// Replacing an existing label keeps its original position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, label: impl Into<String>, minutes: u32) -> Option<u32> {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, value)) => Some(std::mem::replace(value, minutes)),
            None => {
                self.entries.push((label, minutes));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, minutes)| *minutes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(label, minutes)| (label.as_str(), *minutes))
    }

    /// Owned copy of the entries, in insertion order
    pub(crate) fn to_entries(&self) -> Vec<RankedEntry> {
        self.entries
            .iter()
            .map(|(label, minutes)| RankedEntry::new(label.clone(), *minutes))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for RankingDataset {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut dataset = RankingDataset::new();
        for (label, minutes) in iter {
            dataset.insert(label, minutes);
        }
        dataset
    }
}

impl Serialize for RankingDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, minutes) in &self.entries {
            map.serialize_entry(label, minutes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RankingDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = RankingDataset;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of transport labels to whole minutes")
            }

            // Document order becomes insertion order
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut dataset = RankingDataset::new();
                while let Some((label, minutes)) = access.next_entry::<String, u32>()? {
                    dataset.insert(label, minutes);
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}

/// One row of a ranking result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Transport mode, e.g. "Car"
    pub label: String,
    /// Travel time in minutes
    pub minutes: u32,
}

impl RankedEntry {
    pub fn new(label: impl Into<String>, minutes: u32) -> Self {
        Self {
            label: label.into(),
            minutes,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on time is around {} minutes", self.label, self.minutes)
    }
}
