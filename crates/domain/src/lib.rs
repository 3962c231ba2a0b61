//! # lightpanel-domain
//!
//! Pure domain model for the lightpanel remote light controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, time-of-day values
//! - Define **switch states** (`on` / `off`) as reported and commanded on the wire
//! - Define **schedule windows** (daily on/off bounds) and their local/UTC conversion
//! - Define the **status snapshot** returned by the controller's status probe
//! - Contain all parsing and invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod schedule;
pub mod status;
pub mod switch;
