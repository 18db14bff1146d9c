use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use crate::application::session::{ApplicationSession, FormPhase};

/// Open application sessions keyed by id.
///
/// Sessions idle for longer than `idle_ttl` are dropped whenever a new one is
/// opened. A session with a submission in flight is never dropped.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, ApplicationSession>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_ttl,
        }
    }

    pub fn insert(&mut self, session: ApplicationSession) {
        self.prune_idle();
        self.sessions.insert(session.id(), session);
    }

    pub fn get(&self, id: &Uuid) -> Option<&ApplicationSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ApplicationSession> {
        self.sessions.get_mut(id)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<ApplicationSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops expired sessions and returns how many were removed.
    pub fn prune_idle(&mut self) -> usize {
        let ttl = self.idle_ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, s| {
            s.phase() == FormPhase::Submitting || s.last_active().elapsed() <= ttl
        });
        let pruned = before - self.sessions.len();
        if pruned > 0 {
            debug!("Pruned {pruned} idle application sessions");
        }
        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::FormEvent;
    use crate::jobs::normalize::normalize_job;
    use serde_json::json;

    fn session() -> ApplicationSession {
        ApplicationSession::new(&normalize_job(&json!({ "title": "Engineer" })))
    }

    fn submitting_session() -> ApplicationSession {
        let mut s = session();
        for (field, value) in [
            ("name", "Jo"),
            ("email", "a@b.com"),
            ("contactNumber", "09171234567"),
            ("whyHire", "I ship reliable software on time."),
        ] {
            let event: FormEvent =
                serde_json::from_value(json!({ "type": "edit", "field": field, "value": value }))
                    .unwrap();
            s.apply(event).unwrap();
        }
        assert_eq!(s.apply(FormEvent::Submit).unwrap(), FormPhase::Submitting);
        s
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted_on_insert() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let old = session();
        let old_id = old.id();
        store.insert(old);

        tokio::time::advance(Duration::from_secs(61)).await;
        let fresh = session();
        let fresh_id = fresh.id();
        store.insert(fresh);

        assert!(store.get(&old_id).is_none());
        assert!(store.get(&fresh_id).is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let s = session();
        let id = s.id();
        store.insert(s);

        tokio::time::advance(Duration::from_secs(45)).await;
        store
            .get_mut(&id)
            .unwrap()
            .apply(FormEvent::Blur {
                field: crate::application::form::FormField::Name,
            })
            .unwrap();
        tokio::time::advance(Duration::from_secs(45)).await;

        assert_eq!(store.prune_idle(), 0);
        assert!(store.get(&id).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_submission_is_never_evicted() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let s = submitting_session();
        let id = s.id();
        store.insert(s);

        tokio::time::advance(Duration::from_secs(600)).await;
        assert_eq!(store.prune_idle(), 0);
        assert!(store.get(&id).is_some());
        assert!(!store.is_empty());
    }
}
