use askama::Template;

#[derive(Template)]
#[template(path = "thank_you.html")]
pub struct ThankYouTemplate {
    pub version: &'static str,
}
