pub mod auth;
pub mod destinations;
pub mod favorites;
pub mod index;
pub mod weather;

pub use auth::{login, me, register};
pub use destinations::{get_destination, list_destinations};
pub use favorites::{add_favorite, list_favorites, remove_favorite};
pub use index::index;
pub use weather::weather;
