//! # lightpanel-adapter-http-ureq
//!
//! Native HTTP adapter: implements the `ControlService` port with `ureq`.
//!
//! ## Responsibilities
//! - Send `HEAD` requests to the light controller's base URL
//! - Capture the status code **and** reason phrase of every reply (the status
//!   probe carries its snapshot in the reason phrase)
//! - Keep blocking IO off the async executor via `spawn_blocking`
//!
//! ## Dependency rule
//! Same as other adapters: depends on `lightpanel-app` and `lightpanel-domain`.

pub mod client;
pub mod config;
pub mod error;

pub use client::UreqControlService;
pub use config::HttpConfig;
pub use error::HttpConfigError;
