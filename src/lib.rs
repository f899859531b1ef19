//! Intake service for the EBNY job application form.
//!
//! Serves the bilingual form, decodes submitted fields (including
//! `Group[index][field]` repeatable sections) and forwards each submission
//! once to a form relay or an email API.

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod report;
pub mod routes;
pub mod templates;
pub mod utils;

pub use routes::build_router;
