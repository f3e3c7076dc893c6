pub mod catalog;
pub mod destination;
pub mod document;
pub mod email;
pub mod favorite;
pub mod ids;
pub mod password;
pub mod user;
pub mod username;
pub mod weather;
