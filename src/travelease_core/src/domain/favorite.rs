use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{DestinationId, FavoriteId, UserId};

/// Join record between a user and a destination.
///
/// At most one record exists per `(user_id, destination_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub destination_id: DestinationId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn links(&self, user_id: UserId, destination_id: DestinationId) -> bool {
        self.user_id == user_id && self.destination_id == destination_id
    }
}
