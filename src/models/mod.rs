pub mod application;
pub mod auth;
pub mod blog;
pub mod job;
