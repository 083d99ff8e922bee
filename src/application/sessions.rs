// src/application/sessions.rs
use crate::application::ports::ClockPort;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// What a client should do with its refresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    Keep,
    Reauthenticate,
}

/// Evaluates token expiry against an injected clock. A token counts as
/// near-expiry once it is within `margin` of expiring.
pub struct SessionWatchdog {
    clock: Arc<ClockPort>,
    margin: Duration,
}

impl SessionWatchdog {
    pub const DEFAULT_MARGIN_SECS: i64 = 60;

    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self::with_margin(clock, Duration::seconds(Self::DEFAULT_MARGIN_SECS))
    }

    pub fn with_margin(clock: Arc<ClockPort>, margin: Duration) -> Self {
        Self { clock, margin }
    }

    /// True when the access token expires within the margin. A token with no
    /// known expiry is reported as not near expiry; the refresh path is the
    /// one that treats missing expiry as invalid.
    pub fn access_token_near_expiry(&self, expires_at: Option<DateTime<Utc>>) -> bool {
        match expires_at {
            Some(expires_at) => expires_at - self.clock.now() < self.margin,
            None => false,
        }
    }

    /// A refresh token with no expiry, or one inside the margin, forces the
    /// client back through authentication.
    pub fn refresh_token_decision(&self, expires_at: Option<DateTime<Utc>>) -> RefreshDecision {
        match expires_at {
            Some(expires_at) if expires_at - self.clock.now() >= self.margin => {
                RefreshDecision::Keep
            }
            _ => RefreshDecision::Reauthenticate,
        }
    }
}
