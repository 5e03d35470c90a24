//! Synchronous client for the Myteam Bot API
//!
//! Each method on [`BotApiClient`] performs one blocking HTTP round trip:
//! form-encoded POST or query-string GET out, JSON back, deserialized into
//! the typed responses in [`types`]. Failures surface as [`ApiError`];
//! server-side errors (5xx) are logged and returned, never swallowed.
//!
//! ```no_run
//! use std::sync::Arc;
//! use myteam_client::{BotApiClient, Config};
//!
//! let mut config = Config::load_env();
//! config.api.token = "001.TOKEN".to_string();
//! let client = BotApiClient::new(Arc::new(config));
//! client.send_text("1234567890", "hello")?;
//! # Ok::<(), myteam_client::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

pub use client::{BotApiClient, DEFAULT_POLL_TIME};
pub use config::{BotApiSettings, Config, FileSettings};
pub use errors::{ApiError, ConfigError};
