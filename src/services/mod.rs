// Service exports
pub mod presence;

pub use presence::{ConnectionId, PresenceRegistry};
