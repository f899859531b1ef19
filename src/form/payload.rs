use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Value of a top-level field. A name sent once stays `Single`; a name sent
/// again is promoted to `Many`, keeping arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Single(String),
    Many(Vec<String>),
}

impl ScalarValue {
    pub fn push(&mut self, value: String) {
        match self {
            ScalarValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ScalarValue::Many(vec![first, value]);
            }
            ScalarValue::Many(values) => values.push(value),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            ScalarValue::Single(value) => std::slice::from_ref(value),
            ScalarValue::Many(values) => values,
        }
    }

    /// Display form used by the reports.
    pub fn joined(&self) -> String {
        self.values().join(", ")
    }
}

/// One entry of a repeatable section, keyed by sub-field name.
pub type GroupRecord = BTreeMap<String, String>;

/// Entries of a repeatable section positioned by their submitted index.
/// Indices that never arrived are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group {
    slots: Vec<Option<GroupRecord>>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions, including empty ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GroupRecord> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Present entries with their original index, in index order.
    pub fn records(&self) -> impl Iterator<Item = (usize, &GroupRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (i, r)))
    }

    /// Record at `index`, growing the slot list as needed.
    pub fn entry(&mut self, index: usize) -> &mut GroupRecord {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].get_or_insert_with(GroupRecord::new)
    }
}

/// Reconstructed form submission: top-level fields plus repeatable groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    scalars: IndexMap<String, ScalarValue>,
    groups: BTreeMap<String, Group>,
    /// Group positions allocated so far, across all groups.
    slot_count: usize,
}

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarValue> {
        self.scalars.get(name)
    }

    /// First value of a scalar, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.scalar(name).and_then(|v| v.values().first()).map(String::as_str)
    }

    /// Scalars in order of first arrival.
    pub fn scalars(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.scalars.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.groups.is_empty()
    }

    /// Append a value, promoting to a sequence on repeat.
    pub fn push_scalar(&mut self, name: &str, value: String) {
        match self.scalars.get_mut(name) {
            Some(existing) => existing.push(value),
            None => {
                self.scalars.insert(name.to_string(), ScalarValue::Single(value));
            }
        }
    }

    /// Store a value verbatim, replacing any earlier one.
    pub fn set_scalar(&mut self, name: &str, value: String) {
        match self.scalars.get_mut(name) {
            Some(existing) => *existing = ScalarValue::Single(value),
            None => {
                self.scalars.insert(name.to_string(), ScalarValue::Single(value));
            }
        }
    }

    /// Group positions allocated across all groups, empty ones included.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Positions that storing `group[index]` would add.
    pub fn slot_growth(&self, group: &str, index: usize) -> usize {
        let len = self.groups.get(group).map_or(0, Group::len);
        (index + 1).saturating_sub(len)
    }

    pub fn set_group_field(&mut self, group: &str, index: usize, sub_field: &str, value: String) {
        self.slot_count += self.slot_growth(group, index);
        self.groups
            .entry(group.to_string())
            .or_default()
            .entry(index)
            .insert(sub_field.to_string(), value);
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scalars.len() + self.groups.len()))?;
        for (name, value) in &self.scalars {
            map.serialize_entry(name, value)?;
        }
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_promotes_on_repeat() {
        let mut value = ScalarValue::Single("a".into());
        value.push("b".into());
        value.push("c".into());
        assert_eq!(value, ScalarValue::Many(vec!["a".into(), "b".into(), "c".into()]));
        assert_eq!(value.joined(), "a, b, c");
    }

    #[test]
    fn group_entry_pads_with_empty_slots() {
        let mut group = Group::new();
        group.entry(2).insert("CourseName".into(), "Rust".into());
        assert_eq!(group.len(), 3);
        assert!(group.get(0).is_none());
        assert!(group.get(1).is_none());
        assert_eq!(group.get(2).and_then(|r| r.get("CourseName")).map(String::as_str), Some("Rust"));
        assert_eq!(group.records().map(|(i, _)| i).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn slot_count_tracks_growth_across_groups() {
        let mut payload = SubmissionPayload::new();
        assert_eq!(payload.slot_growth("Experience", 2), 3);
        payload.set_group_field("Experience", 2, "CompanyName", "A".into());
        payload.set_group_field("Experience", 0, "CompanyName", "B".into());
        payload.set_group_field("Course", 1, "CourseName", "Rust".into());
        assert_eq!(payload.slot_count(), 5);
        assert_eq!(payload.slot_growth("Experience", 1), 0);
        assert_eq!(payload.slot_growth("Experience", 4), 2);
    }

    #[test]
    fn scalars_keep_first_arrival_order() {
        let mut payload = SubmissionPayload::new();
        payload.push_scalar("b", "1".into());
        payload.push_scalar("a", "2".into());
        payload.set_scalar("b", "3".into());
        let names: Vec<&str> = payload.scalars().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(payload.first("b"), Some("3"));
    }

    #[test]
    fn serializes_like_the_browser_object() {
        let mut payload = SubmissionPayload::new();
        payload.push_scalar("Name", "Jane".into());
        payload.push_scalar("Language_1", "English".into());
        payload.push_scalar("Language_1", "Arabic".into());
        payload.set_group_field("Experience", 1, "CompanyName", "Acme".into());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Name": "Jane",
                "Language_1": ["English", "Arabic"],
                "Experience": [null, {"CompanyName": "Acme"}],
            })
        );
    }
}
