use askama::Template;

use crate::report::layout::{Block, FieldSpec, LAYOUT};

/// One section of the form page. Group sections render a first entry at
/// index 0 that the client script clones.
pub struct FormBlockView {
    pub title: &'static str,
    pub is_group: bool,
    pub group_name: &'static str,
    pub entry_label: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Template)]
#[template(path = "application_form.html")]
pub struct ApplicationFormTemplate {
    pub version: &'static str,
    pub submit_url: &'static str,
    pub blocks: Vec<FormBlockView>,
}

impl ApplicationFormTemplate {
    pub fn new(submit_url: &'static str) -> Self {
        let blocks = LAYOUT
            .iter()
            .map(|block| match block {
                Block::Section(s) => FormBlockView {
                    title: s.title,
                    is_group: false,
                    group_name: "",
                    entry_label: "",
                    fields: s.fields,
                },
                Block::Group(g) => FormBlockView {
                    title: g.title,
                    is_group: true,
                    group_name: g.name,
                    entry_label: g.entry_label,
                    fields: g.fields,
                },
            })
            .collect();
        Self {
            version: env!("CARGO_PKG_VERSION"),
            submit_url,
            blocks,
        }
    }
}
