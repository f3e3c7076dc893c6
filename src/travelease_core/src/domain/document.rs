use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    catalog::seed_destinations,
    destination::Destination,
    email::Email,
    favorite::Favorite,
    ids::{DestinationId, FavoriteId, UserId},
    user::{NewUser, User},
    username::Username,
};

/// Last id handed out per collection.
///
/// Persisted next to the collections so that ids stay monotonic when
/// records are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequences {
    pub users: i64,
    pub destinations: i64,
    pub favorites: i64,
}

/// The single persisted aggregate. All reads and writes go through a
/// whole `Document`; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub users: Vec<User>,
    pub destinations: Vec<Destination>,
    pub favorites: Vec<Favorite>,
    #[serde(default)]
    pub sequences: Sequences,
}

impl Document {
    /// Empty users and favorites plus the destination catalog.
    pub fn seed() -> Self {
        let destinations = seed_destinations();
        let sequences = Sequences {
            destinations: destinations
                .iter()
                .map(|d| d.id.value())
                .max()
                .unwrap_or_default(),
            ..Sequences::default()
        };
        Self {
            users: Vec::new(),
            destinations,
            favorites: Vec::new(),
            sequences,
        }
    }

    pub fn user_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|user| &user.email == email)
    }

    pub fn user_by_username(&self, username: &Username) -> Option<&User> {
        self.users.iter().find(|user| &user.username == username)
    }

    pub fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn destination(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|dest| dest.id == id)
    }

    pub fn search_destinations(&self, term: &str) -> Vec<Destination> {
        let needle = term.to_lowercase();
        self.destinations
            .iter()
            .filter(|dest| dest.matches(&needle))
            .cloned()
            .collect()
    }

    pub fn favorite(&self, user_id: UserId, destination_id: DestinationId) -> Option<&Favorite> {
        self.favorites
            .iter()
            .find(|fav| fav.links(user_id, destination_id))
    }

    /// Destinations favorited by `user_id`, in the order they were added.
    ///
    /// Favorites pointing at a destination that no longer exists are skipped.
    pub fn favorite_destinations(&self, user_id: UserId) -> Vec<Destination> {
        self.favorites
            .iter()
            .filter(|fav| fav.user_id == user_id)
            .filter_map(|fav| self.destination(fav.destination_id))
            .cloned()
            .collect()
    }

    /// Appends a user unless the email or the username is already taken.
    pub fn insert_user(&mut self, new_user: NewUser, created_at: DateTime<Utc>) -> Option<User> {
        if self.user_by_email(&new_user.email).is_some()
            || self.user_by_username(&new_user.username).is_some()
        {
            return None;
        }

        let user = User {
            id: self.next_user_id(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at,
        };
        self.users.push(user.clone());
        Some(user)
    }

    /// Appends a favorite unless the pair is already recorded.
    pub fn insert_favorite(
        &mut self,
        user_id: UserId,
        destination_id: DestinationId,
        created_at: DateTime<Utc>,
    ) -> Option<Favorite> {
        if self.favorite(user_id, destination_id).is_some() {
            return None;
        }

        let favorite = Favorite {
            id: self.next_favorite_id(),
            user_id,
            destination_id,
            created_at,
        };
        self.favorites.push(favorite.clone());
        Some(favorite)
    }

    /// Returns whether any record was removed.
    pub fn remove_favorite(&mut self, user_id: UserId, destination_id: DestinationId) -> bool {
        let before = self.favorites.len();
        self.favorites
            .retain(|fav| !fav.links(user_id, destination_id));
        self.favorites.len() < before
    }

    fn next_user_id(&mut self) -> UserId {
        let highest = self.users.iter().map(|u| u.id.value()).max();
        let next = next_in_sequence(self.sequences.users, highest);
        self.sequences.users = next;
        UserId::new(next)
    }

    fn next_favorite_id(&mut self) -> FavoriteId {
        let highest = self.favorites.iter().map(|f| f.id.value()).max();
        let next = next_in_sequence(self.sequences.favorites, highest);
        self.sequences.favorites = next;
        FavoriteId::new(next)
    }
}

// Documents written before sequences existed carry zeroed counters, so the
// highest stored id also bounds the next value.
fn next_in_sequence(last_issued: i64, highest_stored: Option<i64>) -> i64 {
    last_issued.max(highest_stored.unwrap_or_default()) + 1
}
