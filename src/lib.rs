#![doc = include_str!("../README.md")]

#[cfg(feature = "client")]
pub mod app;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "client")]
pub mod fetcher;
pub mod navigator;
pub mod router;
pub mod session;
pub mod types;

// Re-exports for convenient access
#[cfg(feature = "client")]
pub use app::App;
#[cfg(feature = "client")]
pub use client::ProfileClient;
pub use config::ClientConfig;
pub use error::Error;
#[cfg(feature = "client")]
pub use fetcher::ProfileFetcher;
pub use navigator::{Location, Navigator};
pub use router::{Route, Router, View};
pub use session::{Session, SessionStore};
pub use types::{AccessToken, Email, UserInfo};
