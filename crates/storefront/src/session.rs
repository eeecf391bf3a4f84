use std::{collections::HashMap, sync::Arc, time::Duration};

use catalog::Catalog;
use shared::domain::SessionId;
use tokio::{
    sync::{Mutex, RwLock},
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    cart::CheckoutFlow, error::FlowError, task::ScheduledTask, visualize::Visualizer,
    wizard::CustomOrderWizard,
};

/// Everything one visitor has in progress.
#[derive(Debug)]
pub struct Session {
    pub cart: CheckoutFlow,
    pub wizard: CustomOrderWizard,
    pub visualizer: Visualizer,
}

impl Session {
    pub fn new(catalog: &Catalog) -> Result<Self, FlowError> {
        Ok(Self {
            cart: CheckoutFlow::new(),
            wizard: CustomOrderWizard::new(),
            visualizer: Visualizer::new(catalog)?,
        })
    }
}

struct SessionEntry {
    session: Arc<Mutex<Session>>,
    last_seen: Instant,
}

/// Shared session table. Each session is locked independently so one
/// visitor's slow submission never blocks another.
#[derive(Clone, Default)]
pub struct Sessions {
    inner: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, catalog: &Catalog) -> Result<SessionId, FlowError> {
        let session = Session::new(catalog)?;
        let id = SessionId::new();
        self.inner.write().await.insert(
            id,
            SessionEntry {
                session: Arc::new(Mutex::new(session)),
                last_seen: Instant::now(),
            },
        );
        info!(session_id = %id, "session created");
        Ok(id)
    }

    /// Looks up a session and marks it as used now.
    pub async fn get(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, FlowError> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id).ok_or(FlowError::UnknownSession(id))?;
        entry.last_seen = Instant::now();
        Ok(entry.session.clone())
    }

    pub async fn remove(&self, id: SessionId) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "session ended");
        }
        removed
    }

    /// Drops every session untouched for at least `max_idle`. Returns how many
    /// were dropped.
    pub async fn purge_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) < max_idle);
        let purged = before - sessions.len();
        if purged > 0 {
            info!(purged, remaining = sessions.len(), "expired idle sessions");
        }
        purged
    }

    /// Runs [`Sessions::purge_idle`] every `period` until the returned task is dropped.
    pub fn spawn_sweeper(&self, max_idle: Duration, period: Duration) -> ScheduledTask {
        let sessions = self.clone();
        debug!(
            max_idle_secs = max_idle.as_secs(),
            period_secs = period.as_secs(),
            "starting session sweeper"
        );
        ScheduledTask::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                sessions.purge_idle(max_idle).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
