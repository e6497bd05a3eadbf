//! HTTP handlers for the FarmArea backend

pub mod area;
pub mod auth;
pub mod farm_settings;
pub mod health;
pub mod note;
pub mod task;
pub mod user;

pub use area::*;
pub use auth::*;
pub use farm_settings::*;
pub use health::*;
pub use note::*;
pub use task::*;
pub use user::*;
