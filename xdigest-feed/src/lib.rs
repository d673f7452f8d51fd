mod client;
mod config;
mod credentials;
mod error;
mod models;

pub use client::ListClient;
pub use config::{Config, DEFAULT_LIST_IDS};
pub use credentials::Credentials;
pub use error::*;
