use std::env;

use jobform::config::{self, Config, RelayMode};

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://formspree.io/f/abc/"),
        "https://formspree.io/f/abc"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.resend.com/emails///"),
        "https://api.resend.com/emails"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.resend.com/emails/  "),
        "https://api.resend.com/emails"
    );
}

#[test]
fn test_from_env_reads_process_variables() {
    // Only this test touches the process environment
    env::set_var("RELAY_MODE", "resend");
    env::set_var("RESEND_API_KEY", "re_from_env");
    env::set_var("CC_EMAIL", "lead@ebny.com.eg");

    let result = Config::from_env();

    env::remove_var("RELAY_MODE");
    env::remove_var("RESEND_API_KEY");
    env::remove_var("CC_EMAIL");

    let config = result.unwrap();
    assert_eq!(config.relay.mode, RelayMode::Email);
    assert_eq!(config.relay.email_api_key.as_deref(), Some("re_from_env"));
    assert_eq!(config.relay.cc_email.as_deref(), Some("lead@ebny.com.eg"));
}

#[test]
fn test_load_env_file_missing_path_is_ignored() {
    config::load_env_file(Some("/nonexistent/jobform.env"));
}
