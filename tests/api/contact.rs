use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, TestApp};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Booking",
        "message": "Hi,\nAre you free June 1?"
    })
}

async fn mount_delivery_success(app: &TestApp) {
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;
}

#[tokio::test]
async fn a_valid_submission_returns_success() {
    let app = spawn_app().await;
    mount_delivery_success(&app).await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!(true), body["success"]);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn a_valid_submission_sends_exactly_one_email() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_contact(&valid_body()).await;
}

#[tokio::test]
async fn the_email_is_addressed_to_the_configured_recipient() {
    let app = spawn_app().await;
    mount_delivery_success(&app).await;

    app.post_contact(&valid_body()).await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(json!([app.recipient.clone()]), body["to"]);
    assert_eq!(json!("jane@example.com"), body["reply_to"]);
    assert_eq!(json!("Contact Form: Booking"), body["subject"]);
}

#[tokio::test]
async fn message_newlines_become_html_line_breaks() {
    let app = spawn_app().await;
    mount_delivery_success(&app).await;

    app.post_contact(&valid_body()).await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();

    let html = body["html"].as_str().unwrap();
    assert!(html.contains("Hi,<br>Are you free June 1?"));
    assert!(html.contains("Jane Doe (jane@example.com)"));

    // The plain-text rendering keeps the literal newlines and layout.
    let text = body["text"].as_str().unwrap();
    assert_eq!(
        "Name: Jane Doe\nEmail: jane@example.com\n\nMessage:\nHi,\nAre you free June 1?",
        text
    );
}

#[tokio::test]
async fn a_delivery_failure_is_reported_with_the_generic_message() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!(false), body["success"]);
    assert_eq!(
        json!("Failed to send email. Please try again later."),
        body["error"]
    );
}

#[tokio::test]
async fn empty_fields_are_forwarded_to_the_delivery_service() {
    // The boundary deliberately does no validation of its own; presence
    // checks live in the form controller.
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_contact(&json!({
            "name": "",
            "email": "",
            "subject": "",
            "message": ""
        }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!(true), body["success"]);
}

#[tokio::test]
async fn a_malformed_payload_is_rejected_with_a_400() {
    let app = spawn_app().await;

    let test_cases = vec![
        (json!({"name": "Jane Doe"}), "missing most fields"),
        (
            json!({"name": "Jane", "email": "j@e.com", "subject": "Hi"}),
            "missing the message",
        ),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}
