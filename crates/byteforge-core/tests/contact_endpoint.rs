use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use byteforge_core::api::{submit_contact, ContactReply, CONTACT_PATH};
use byteforge_core::config::MailerConfig;
use byteforge_core::contact::{ContactRequest, ContactService, Mailer, OutgoingMail};
use byteforge_core::{ContactClient, ContactServer, Error, Result};
use tokio::net::TcpListener;
use tokio::sync::watch;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn deliver(&self, mail: &OutgoingMail) -> Result<()> {
        self.sent.lock().unwrap().push(mail.clone());
        if self.fail {
            Err(Error::Delivery("provider timeout".to_string()))
        } else {
            Ok(())
        }
    }
}

fn service_with(mailer: Arc<RecordingMailer>) -> Arc<ContactService> {
    Arc::new(ContactService::new(mailer, MailerConfig::default()))
}

#[tokio::test]
async fn test_empty_name_is_a_client_error_without_delivery() {
    let mailer = Arc::new(RecordingMailer::default());
    let body = Bytes::from(r#"{"name":"","email":"a@b.com","message":"hi"}"#);

    let (status, reply) = submit_contact(State(service_with(mailer.clone())), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.0,
        ContactReply::error("Missing required fields: name")
    );
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_complete_submission_delivers_exactly_once() {
    let mailer = Arc::new(RecordingMailer::default());
    let body = Bytes::from(
        r#"{"name":"Ada","email":"ada@example.com","company":"Analytical","need":"web","message":"New site please"}"#,
    );

    let (status, reply) = submit_contact(State(service_with(mailer.clone())), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.0, ContactReply::ok());
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "ByteForge Lead - Website Design & Development - Ada");
}

#[tokio::test]
async fn test_delivery_failure_is_a_server_error() {
    let mailer = Arc::new(RecordingMailer {
        fail: true,
        ..Default::default()
    });
    let body = Bytes::from(r#"{"name":"Ada","email":"ada@example.com","message":"hi"}"#);

    let (status, reply) = submit_contact(State(service_with(mailer)), body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(reply.0.error.unwrap().contains("provider timeout"));
}

#[tokio::test]
async fn test_malformed_and_null_bodies() {
    let mailer = Arc::new(RecordingMailer::default());

    let (status, reply) =
        submit_contact(State(service_with(mailer.clone())), Bytes::from("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reply.0.error.unwrap().starts_with("Invalid JSON body"));

    let (status, reply) =
        submit_contact(State(service_with(mailer.clone())), Bytes::from("null")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.0.error.as_deref(),
        Some("Missing required fields: name, email, message")
    );
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_round_trip_over_http() {
    let mailer = Arc::new(RecordingMailer::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = ContactServer::new(service_with(mailer.clone()), addr);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(async move { server.serve(listener, shutdown_rx).await });

    let client = ContactClient::new(&format!("http://{}{}", addr, CONTACT_PATH), 5).unwrap();
    assert!(client.health().await.unwrap());

    client
        .submit(&ContactRequest::new("Ada", "ada@example.com", "hello"))
        .await
        .unwrap();

    let err = client
        .submit(&ContactRequest::new("Ada", "", "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required fields: email");

    assert_eq!(mailer.sent.lock().unwrap().len(), 1);

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap().unwrap();
}
