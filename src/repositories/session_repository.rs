use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{SessionId, SessionState},
};

/// Mutation applied to a session under the store's write lock.
pub type SessionUpdate = Box<dyn FnOnce(&mut SessionState) + Send>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the stored state, or `None` for an unknown or idle session.
    /// A hit counts as activity.
    async fn get(&self, id: SessionId) -> AppResult<Option<SessionState>>;
    async fn set(&self, id: SessionId, state: SessionState) -> AppResult<()>;
    /// Applies `apply` to the current state (fresh if absent or idle) and
    /// stores the result as one step.
    async fn update(&self, id: SessionId, apply: SessionUpdate) -> AppResult<SessionState>;
    /// Number of live sessions.
    async fn count(&self) -> AppResult<usize>;
}

struct SessionEntry {
    state: SessionState,
    last_seen: DateTime<Utc>,
}

pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl InMemorySessionRepository {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        entry.last_seen + self.idle_timeout <= now
    }

    fn purge_idle(&self, sessions: &mut HashMap<SessionId, SessionEntry>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let purged = before - sessions.len();
        if purged > 0 {
            log::debug!("Purged {} idle session(s)", purged);
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, id: SessionId) -> AppResult<Option<SessionState>> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        match sessions.get_mut(&id) {
            Some(entry) if !self.is_expired(entry, now) => {
                entry.last_seen = now;
                Ok(Some(entry.state.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn set(&self, id: SessionId, state: SessionState) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        self.purge_idle(&mut sessions, now);

        sessions.insert(
            id,
            SessionEntry {
                state,
                last_seen: now,
            },
        );
        Ok(())
    }

    async fn update(&self, id: SessionId, apply: SessionUpdate) -> AppResult<SessionState> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        self.purge_idle(&mut sessions, now);

        let entry = sessions.entry(id).or_insert_with(|| SessionEntry {
            state: SessionState::default(),
            last_seen: now,
        });
        apply(&mut entry.state);
        entry.last_seen = now;
        Ok(entry.state.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        let sessions = self.sessions.read().await;
        let now = Utc::now();
        Ok(sessions
            .values()
            .filter(|entry| !self.is_expired(entry, now))
            .count())
    }
}
