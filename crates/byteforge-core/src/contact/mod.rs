//! Contact leads: validation, composition and delivery

pub mod mail;
pub mod mailer;
mod models;
mod service;

pub use mail::OutgoingMail;
pub use mailer::{build_mailer, HttpMailer, Mailer, OutboxMailer};
pub use models::{ContactRequest, Lead, RequiredField, ServiceNeed, ValidationError};
pub use service::{ContactError, ContactService};
