mod common;

use std::time::Duration;

use axum::http::StatusCode;

use jobform::config::{Config, RelayMode, RelaySettings};
use jobform::form::decode_pairs;
use jobform::relay::{Dispatcher, RelayError};

use common::{app, multipart_body, post_form, spawn_fake_relay, END_TO_END_BODY, MULTIPART, URLENCODED};

fn email_settings(base: &str) -> RelaySettings {
    RelaySettings {
        mode: RelayMode::Email,
        email_api_url: format!("{}/emails", base),
        email_api_key: Some("re_test_key".into()),
        cc_email: Some("lead@ebny.com.eg".into()),
        ..RelaySettings::default()
    }
}

fn form_settings(base: &str) -> RelaySettings {
    RelaySettings {
        mode: RelayMode::FormRelay,
        form_relay_url: Some(format!("{}/f/test", base)),
        ..RelaySettings::default()
    }
}

#[tokio::test]
async fn end_to_end_email_report() {
    let (base, seen) = spawn_fake_relay(StatusCode::OK, 0).await;
    let config = Config {
        relay: email_settings(&base),
        ..Config::default()
    };

    let (status, body) = post_form(app(config), URLENCODED, END_TO_END_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.success);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer re_test_key"));

    let json = request.json.as_ref().unwrap();
    assert_eq!(json["to"], serde_json::json!(["hr@ebny.com.eg"]));
    assert_eq!(json["cc"], serde_json::json!(["lead@ebny.com.eg"]));
    assert_eq!(json["reply_to"], "jane@x.com");

    let text = json["text"].as_str().unwrap();
    assert!(text.contains("Applicant: Jane Doe"));
    assert!(text.contains("Experience #1\n  Company Name / اسم الشركة: Acme\n  Position / الوظيفة: Eng\n"));
    assert!(!text.contains("Experience #2"));

    let html = json["html"].as_str().unwrap();
    assert!(html.contains("Experience #1"));
    assert!(html.contains("<td>Acme</td>"));
}

#[tokio::test]
async fn form_relay_receives_flattened_fields() {
    let (base, seen) = spawn_fake_relay(StatusCode::OK, 0).await;
    let config = Config {
        relay: form_settings(&base),
        ..Config::default()
    };
    let body = multipart_body(&[
        ("Name", "Jane Doe"),
        ("Email_Address", "jane@x.com"),
        ("Experience[1][CompanyName]", "Globex"),
        ("Experience[0][CompanyName]", "Acme"),
        ("Language_1", "English"),
        ("Language_1", "Arabic"),
    ]);

    let (status, response) = post_form(app(config), MULTIPART, body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(response.success);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let fields: Vec<(&str, &str)> = seen[0].fields.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(
        fields,
        vec![
            ("Name", "Jane Doe"),
            ("Email_Address", "jane@x.com"),
            ("Language_1", "English"),
            ("Language_1", "Arabic"),
            ("Experience[0][CompanyName]", "Acme"),
            ("Experience[1][CompanyName]", "Globex"),
            ("email", "jane@x.com"),
            ("_subject", "New Job Application Submission - EBNY"),
            ("_replyto", "jane@x.com"),
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base, seen) = spawn_fake_relay(StatusCode::UNPROCESSABLE_ENTITY, 0).await;
    let dispatcher = Dispatcher::new(form_settings(&base)).unwrap();
    let err = dispatcher
        .dispatch(&decode_pairs([("Name", "Jane")]))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Rejected { status: 422, .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_delivery_is_still_acknowledged() {
    let (base, _seen) = spawn_fake_relay(StatusCode::INTERNAL_SERVER_ERROR, 0).await;
    let config = Config {
        relay: email_settings(&base),
        ..Config::default()
    };
    let (status, body) = post_form(app(config), URLENCODED, END_TO_END_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
}

#[tokio::test]
async fn slow_relay_times_out() {
    let (base, _seen) = spawn_fake_relay(StatusCode::OK, 2_000).await;
    let settings = RelaySettings {
        timeout: Duration::from_millis(200),
        ..email_settings(&base)
    };
    let dispatcher = Dispatcher::new(settings).unwrap();
    let err = dispatcher
        .dispatch(&decode_pairs([("Name", "Jane")]))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Network(_)), "{}", err);
}

#[tokio::test]
async fn successful_delivery_reports_status() {
    let (base, _seen) = spawn_fake_relay(StatusCode::OK, 0).await;
    let dispatcher = Dispatcher::new(email_settings(&base)).unwrap();
    let delivery = dispatcher
        .dispatch(&decode_pairs([("Name", "Jane")]))
        .await
        .unwrap();
    assert_eq!(delivery.mode, RelayMode::Email);
    assert_eq!(delivery.status, Some(200));
}
