use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use byteforge_core::{api::CONTACT_PATH, AppConfig, ContactServer};

/// Run the contact endpoint until Ctrl+C
pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let server = ContactServer::from_config(&config)?;

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Setup signal handler for graceful shutdown
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx.send(true);
    });

    println!(
        "Contact endpoint on http://{}{} (mail transport: {:?}). Press Ctrl+C to stop.",
        server.bind_address(),
        CONTACT_PATH,
        config.mailer.transport
    );
    println!("  Leads go to: {}", config.mailer.operator_address);

    // Serve (blocks until shutdown)
    server.run(shutdown_rx).await?;

    println!("Contact endpoint stopped.");
    Ok(())
}
