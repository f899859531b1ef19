// Page templates
pub mod application_form_template;
pub mod thank_you_template;

// Re-export all templates
pub use application_form_template::{ApplicationFormTemplate, FormBlockView};
pub use thank_you_template::ThankYouTemplate;
