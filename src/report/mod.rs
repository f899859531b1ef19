//! Human-readable renderings of a submission.
//!
//! [`Report::build`] lays a payload out against the declared fields in
//! [`layout`]; [`render_text`] and [`render_html`] turn that into the plain
//! and HTML bodies of the notification email.

mod escape;
mod html;
pub mod layout;
mod text;

pub use escape::escape_html;
pub use html::{render_html, ApplicationEmailTemplate};
pub use text::render_text;

use crate::form::{GroupRecord, SubmissionPayload};
use layout::{Block, FieldSpec, GroupSpec, SectionSpec, LAYOUT};

/// Shown for every declared field without a value.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// `Label #n`, numbered over the entries that were sent.
    pub heading: String,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    Fields { title: &'static str, lines: Vec<Line> },
    Entries { title: &'static str, entries: Vec<Entry> },
}

impl ReportBlock {
    pub fn title(&self) -> &'static str {
        match self {
            ReportBlock::Fields { title, .. } | ReportBlock::Entries { title, .. } => *title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub applicant: String,
    pub blocks: Vec<ReportBlock>,
}

impl Report {
    pub fn build(payload: &SubmissionPayload) -> Self {
        let blocks = LAYOUT
            .iter()
            .map(|block| match block {
                Block::Section(section) => section_block(section, payload),
                Block::Group(group) => group_block(group, payload),
            })
            .collect();
        Self {
            applicant: present(payload.scalar("Name").map(|v| v.joined())),
            blocks,
        }
    }
}

fn section_block(section: &SectionSpec, payload: &SubmissionPayload) -> ReportBlock {
    let lines = section
        .fields
        .iter()
        .map(|field| Line {
            label: field.label,
            value: present(payload.scalar(field.key).map(|v| v.joined())),
        })
        .collect();
    ReportBlock::Fields { title: section.title, lines }
}

fn group_block(group: &GroupSpec, payload: &SubmissionPayload) -> ReportBlock {
    let entries = payload
        .group(group.name)
        .map(|g| {
            g.records()
                .enumerate()
                .map(|(n, (_, record))| Entry {
                    heading: format!("{} #{}", group.entry_label, n + 1),
                    lines: record_lines(group.fields, record),
                })
                .collect()
        })
        .unwrap_or_default();
    ReportBlock::Entries { title: group.title, entries }
}

fn record_lines(fields: &'static [FieldSpec], record: &GroupRecord) -> Vec<Line> {
    fields
        .iter()
        .map(|field| Line {
            label: field.label,
            value: present(record.get(field.key).cloned()),
        })
        .collect()
}

/// Blank input counts as missing; stored values are never modified.
fn present(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}
