//! HTTP surface of the contact form
//!
//! The server exposes `POST /api/contact`; the client is what the page and
//! the CLI use to reach it.

mod client;
mod protocol;
mod server;

pub use client::ContactClient;
pub use protocol::*;
pub use server::{router, submit_contact, ContactServer};
