//! Flat form fields to structured submissions and back.
//!
//! Browsers send repeatable sections as `Group[index][SubField]` names next
//! to ordinary top-level fields. [`FieldDecoder`] rebuilds the nested shape,
//! [`encode_pairs`] flattens it again for relays that expect form fields.

mod decoder;
mod encoder;
mod key;
mod payload;

pub use decoder::{decode_pairs, FieldDecoder, DEFAULT_MAX_GROUP_INDEX, DEFAULT_MAX_GROUP_SLOTS};
pub use encoder::encode_pairs;
pub use key::{indexed_key, is_bracketed, parse_field_key, FieldKey};
pub use payload::{Group, GroupRecord, ScalarValue, SubmissionPayload};
