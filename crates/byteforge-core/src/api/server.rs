//! Contact endpoint server
//!
//! Listens on TCP and serves the contact routes until the shutdown
//! channel flips to `true`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::protocol::*;
use crate::config::AppConfig;
use crate::contact::{build_mailer, ContactError, ContactRequest, ContactService};
use crate::Result;

/// HTTP server for contact submissions
pub struct ContactServer {
    service: Arc<ContactService>,
    bind_address: SocketAddr,
}

impl ContactServer {
    pub fn new(service: Arc<ContactService>, bind_address: SocketAddr) -> Self {
        Self {
            service,
            bind_address,
        }
    }

    /// Build the server and its mailer from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mailer = build_mailer(config)?;
        info!("Contact mail transport: {}", mailer.name());
        let service = Arc::new(ContactService::new(mailer, config.mailer.clone()));
        Ok(Self::new(service, config.server.bind_address))
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        let listener = TcpListener::bind(self.bind_address).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve(
        &self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<()> {
        info!("Contact endpoint listening on http://{}{}", listener.local_addr()?, CONTACT_PATH);

        axum::serve(listener, router(self.service.clone()))
            .with_graceful_shutdown(async move {
                while shutdown_rx.changed().await.is_ok() {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                }
                info!("Contact endpoint shutting down");
            })
            .await?;

        Ok(())
    }
}

/// Routes of the contact endpoint
pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(CONTACT_PATH, post(submit_contact))
        .with_state(service)
}

async fn health_check() -> &'static str {
    "OK"
}

/// `POST /api/contact`
///
/// The body is parsed by hand so malformed JSON still gets the
/// `{"error": ...}` shape instead of the framework's plain-text rejection.
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    body: Bytes,
) -> (StatusCode, Json<ContactReply>) {
    let request = match serde_json::from_slice::<Option<ContactRequest>>(&body) {
        Ok(request) => request.unwrap_or_default(),
        Err(e) => {
            debug!("Rejected contact body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactReply::error(format!("Invalid JSON body: {}", e))),
            );
        }
    };

    match service.submit(&request).await {
        Ok(_) => (StatusCode::OK, Json(ContactReply::ok())),
        Err(ContactError::Validation(e)) => {
            debug!("Rejected contact submission: {}", e);
            (StatusCode::BAD_REQUEST, Json(ContactReply::error(e.to_string())))
        }
        Err(ContactError::Delivery(message)) => {
            warn!("Contact submission failed: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactReply::error(message)),
            )
        }
    }
}
