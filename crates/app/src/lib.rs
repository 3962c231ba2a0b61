//! # lightpanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ControlService`: HEAD calls against the light controller
//!   - `PanelView`: the switches, time fields and status label shown to the user
//!   - `Notifier`: transient toast notifications
//!   - `Clock`: the local UTC offset used for time conversion
//! - Define the **driving/inbound** use-case struct:
//!   - `PanelController`: initial status sync, light toggle, schedule toggle
//! - Orchestrate domain objects without knowing *how* HTTP or rendering works
//!
//! ## Dependency rule
//! Depends on `lightpanel-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Concurrency
//! Everything runs on one cooperative thread. Port futures are deliberately
//! not `Send` so that single-threaded browser adapters can implement them.

pub mod ports;
pub mod services;
