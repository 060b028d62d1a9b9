use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::chat::ChatSession;
use crate::config::ChatConfig;

pub type SessionHandle = Arc<Mutex<ChatSession>>;

/// Live sessions keyed by id. Each session sits behind its own mutex, so turns
/// within a session run one at a time and sessions never share a message list.
///
/// Sessions stay in memory until they are removed with [`SessionRegistry::remove`]
/// (`DELETE /sessions/{id}`). There is no idle expiry, so a long-running server
/// keeps every session its clients never ended.
pub struct SessionRegistry {
    default_prompt: String,
    form_placeholder: String,
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionRegistry {
    pub fn new(default_prompt: impl Into<String>, form_placeholder: impl Into<String>) -> Self {
        Self {
            default_prompt: default_prompt.into(),
            form_placeholder: form_placeholder.into(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.system_prompt.clone(), config.form_placeholder.clone())
    }

    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let mut session = ChatSession::new(self.default_prompt.clone(), self.form_placeholder.clone());
        session.initialize();
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));

        self.sessions.write().await.insert(id, handle.clone());
        info!("Created session {}", id);
        (id, handle)
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn list(&self) -> Vec<Uuid> {
        self.sessions.read().await.keys().copied().collect()
    }

    /// Ends a session. Returns false when the id was unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Ended session {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
