//! Clock port: source of the UTC offset used to convert schedule times.

use chrono::{FixedOffset, Offset, Utc};

/// Provides the local clock's current UTC offset.
///
/// The offset is read at every conversion, never cached.
pub trait Clock {
    fn utc_offset(&self) -> FixedOffset;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn utc_offset(&self) -> FixedOffset {
        lightpanel_domain::time::local_offset()
    }
}

/// A clock pinned to one offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub FixedOffset);

impl FixedClock {
    /// A clock at UTC+0.
    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }
}

impl Clock for FixedClock {
    fn utc_offset(&self) -> FixedOffset {
        self.0
    }
}
