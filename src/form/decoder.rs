use super::key::{is_bracketed, parse_field_key, FieldKey};
use super::payload::SubmissionPayload;

/// Default upper bound for group indices accepted from a request.
pub const DEFAULT_MAX_GROUP_INDEX: usize = 100;

/// Default cap on group positions allocated for one request, summed over
/// every group name.
pub const DEFAULT_MAX_GROUP_SLOTS: usize = 1_000;

/// Folds flat `(name, value)` pairs into a [`SubmissionPayload`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDecoder {
    max_index: usize,
    max_slots: usize,
}

impl Default for FieldDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GROUP_INDEX)
    }
}

impl FieldDecoder {
    pub fn new(max_index: usize) -> Self {
        Self {
            max_index,
            max_slots: DEFAULT_MAX_GROUP_SLOTS,
        }
    }

    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Decode pairs in arrival order. Total over all inputs.
    pub fn decode<I, K, V>(&self, pairs: I) -> SubmissionPayload
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = SubmissionPayload::new();
        for (key, value) in pairs {
            self.apply(&mut payload, key.as_ref(), value.into());
        }
        payload
    }

    fn apply(&self, payload: &mut SubmissionPayload, raw: &str, value: String) {
        match parse_field_key(raw, self.max_index) {
            FieldKey::Indexed { group, index, sub_field } => {
                let growth = payload.slot_growth(group, index);
                if payload.slot_count() + growth > self.max_slots {
                    tracing::warn!(
                        key = raw,
                        max_slots = self.max_slots,
                        "Group slot budget exhausted; keeping field as a literal scalar"
                    );
                    payload.set_scalar(raw, value);
                } else {
                    payload.set_group_field(group, index, sub_field, value);
                }
            }
            FieldKey::Scalar(name) if is_bracketed(name) => payload.set_scalar(name, value),
            FieldKey::Scalar(name) => payload.push_scalar(name, value),
        }
    }
}

/// Decode with the default index bound.
pub fn decode_pairs<I, K, V>(pairs: I) -> SubmissionPayload
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    FieldDecoder::default().decode(pairs)
}
