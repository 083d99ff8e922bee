// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{ports::ClockPort, queries::users::UserQueryService, sessions::SessionWatchdog},
    domain::user::UserRepository,
};

/// Composition root for the application layer. Collaborators are handed in
/// once, explicitly; nothing resolves dependencies at call time.
pub struct ApplicationServices {
    pub user_queries: Arc<UserQueryService>,
    pub session_watchdog: Arc<SessionWatchdog>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
        session_margin: Duration,
    ) -> Self {
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let session_watchdog = Arc::new(SessionWatchdog::with_margin(
            Arc::clone(&clock),
            session_margin,
        ));

        Self {
            user_queries,
            session_watchdog,
        }
    }
}
