pub mod api;
pub mod config;
pub mod contact;
pub mod error;

pub use api::{ContactClient, ContactServer};
pub use config::{AppConfig, EasingType, NavigatorConfig};
pub use error::{Error, Result};
