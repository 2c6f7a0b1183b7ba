pub mod config;
pub mod contact;
pub mod page;
pub mod serve;
