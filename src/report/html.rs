use askama::Template;

use super::{escape_html, Line, Report, ReportBlock, NOT_AVAILABLE};

/// A label/value pair, both already escaped.
pub struct EmailLine {
    pub label: String,
    pub value: String,
}

pub struct EmailEntry {
    pub heading: String,
    pub lines: Vec<EmailLine>,
}

pub struct EmailBlock {
    pub title: String,
    pub is_group: bool,
    pub lines: Vec<EmailLine>,
    pub entries: Vec<EmailEntry>,
}

/// HTML body of the notification email.
///
/// Askama's own escaper differs from the entity set mail clients are given
/// (`&#039;` for quotes), so the template runs unescaped and every string is
/// escaped once while building the view.
#[derive(Template)]
#[template(path = "application_email.html", escape = "none")]
pub struct ApplicationEmailTemplate {
    pub applicant: String,
    pub not_available: &'static str,
    pub blocks: Vec<EmailBlock>,
}

impl ApplicationEmailTemplate {
    pub fn from_report(report: &Report) -> Self {
        let blocks = report
            .blocks
            .iter()
            .map(|block| match block {
                ReportBlock::Fields { title, lines } => EmailBlock {
                    title: escape_html(title),
                    is_group: false,
                    lines: escape_lines(lines),
                    entries: Vec::new(),
                },
                ReportBlock::Entries { title, entries } => EmailBlock {
                    title: escape_html(title),
                    is_group: true,
                    lines: Vec::new(),
                    entries: entries
                        .iter()
                        .map(|e| EmailEntry {
                            heading: escape_html(&e.heading),
                            lines: escape_lines(&e.lines),
                        })
                        .collect(),
                },
            })
            .collect();
        Self {
            applicant: escape_html(&report.applicant),
            not_available: NOT_AVAILABLE,
            blocks,
        }
    }
}

fn escape_lines(lines: &[Line]) -> Vec<EmailLine> {
    lines
        .iter()
        .map(|l| EmailLine {
            label: escape_html(l.label),
            value: escape_html(&l.value),
        })
        .collect()
}

pub fn render_html(report: &Report) -> Result<String, askama::Error> {
    ApplicationEmailTemplate::from_report(report).render()
}
