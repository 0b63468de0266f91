use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Identifier of one live client connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ConnectionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide map of online users to their connection
///
/// One connection per user: a new connect replaces the previous entry.
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct PresenceRegistry {
    connections: Arc<RwLock<Connections>>,
}

/// Both directions of the user/connection mapping, kept in step under one lock
#[derive(Debug, Default)]
struct Connections {
    by_user: HashMap<String, ConnectionId>,
    by_connection: HashMap<ConnectionId, String>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `user_id` as online on `connection`
    ///
    /// Returns the connection it replaced, if any.
    pub async fn connect(&self, user_id: &str, connection: ConnectionId) -> Option<ConnectionId> {
        let mut connections = self.connections.write().await;
        let previous = connections.by_user.insert(user_id.to_string(), connection);
        if let Some(previous) = previous {
            connections.by_connection.remove(&previous);
        }
        // A connection id belongs to one user at a time
        if let Some(owner) = connections.by_connection.insert(connection, user_id.to_string()) {
            if owner != user_id {
                connections.by_user.remove(&owner);
            }
        }
        drop(connections);

        tracing::debug!("User {} connected on {}", user_id, connection);
        previous
    }

    /// Drop whichever user owns `connection`
    ///
    /// A stale connection that was already replaced leaves the map untouched.
    pub async fn disconnect(&self, connection: ConnectionId) -> Option<String> {
        let mut connections = self.connections.write().await;
        let user_id = connections.by_connection.remove(&connection)?;
        connections.by_user.remove(&user_id);
        drop(connections);

        tracing::debug!("User {} disconnected from {}", user_id, connection);
        Some(user_id)
    }

    pub async fn connection_for(&self, user_id: &str) -> Option<ConnectionId> {
        self.connections.read().await.by_user.get(user_id).copied()
    }

    pub async fn is_online(&self, user_id: &str) -> bool {
        self.connections.read().await.by_user.contains_key(user_id)
    }

    /// Online user ids, sorted
    pub async fn online_users(&self) -> Vec<String> {
        let mut users: Vec<String> = self.connections.read().await.by_user.keys().cloned().collect();
        users.sort();
        users
    }
}
