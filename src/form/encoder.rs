use super::key::indexed_key;
use super::payload::SubmissionPayload;

/// Flatten a payload back into wire pairs.
///
/// Scalars come first in arrival order, a repeated scalar as repeated bare
/// names. Group entries follow as `Group[i][SubField]`, keeping the original
/// index; empty slots produce nothing.
pub fn encode_pairs(payload: &SubmissionPayload) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (name, value) in payload.scalars() {
        for v in value.values() {
            pairs.push((name.to_string(), v.clone()));
        }
    }
    for (name, group) in payload.groups() {
        for (index, record) in group.records() {
            for (sub_field, v) in record {
                pairs.push((indexed_key(name, index, sub_field), v.clone()));
            }
        }
    }
    pairs
}
