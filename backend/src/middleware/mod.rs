//! Request middleware for the FarmArea backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
