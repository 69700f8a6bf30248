pub mod auth;
pub mod booking;
pub mod id;
pub mod list;
pub mod role;
pub mod service;
pub mod user;
