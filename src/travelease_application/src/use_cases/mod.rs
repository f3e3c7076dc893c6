pub mod current_user;
pub mod destinations;
pub mod favorites;
pub mod login;
pub mod register;

use travelease_core::{AuthToken, UserProfile};

pub use current_user::{CurrentUserError, CurrentUserUseCase};
pub use destinations::{BrowseDestinationsUseCase, GetDestinationError};
pub use favorites::{AddFavoriteError, FavoritesUseCase, RemoveFavoriteError};
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterError, RegisterUseCase};

/// Credential plus public profile returned by register and login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: AuthToken,
    pub user: UserProfile,
}
