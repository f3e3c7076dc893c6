pub mod error;
pub mod service;
pub mod store;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::ErrorKind;
pub use service::TravelService;
pub use store::{AddFavoriteOutcome, CreateUserOutcome, Mutation, TravelStore};
pub use use_cases::{
    AddFavoriteError, AuthSession, BrowseDestinationsUseCase, CurrentUserError,
    CurrentUserUseCase, FavoritesUseCase, GetDestinationError, LoginError, LoginUseCase,
    RegisterError, RegisterUseCase, RemoveFavoriteError,
};
