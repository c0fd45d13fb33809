pub mod admin;
pub mod auth;
pub mod casting_call;
pub mod favorite;
pub mod functions;
pub mod profile;
