mod auth;
mod destinations;
mod favorites;
mod helpers;
mod weather;
