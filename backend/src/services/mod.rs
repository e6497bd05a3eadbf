//! Business logic services for the FarmArea backend

pub mod area;
pub mod auth;
pub mod farm_settings;
pub mod note;
pub mod task;
pub mod user;

pub use area::AreaService;
pub use auth::AuthService;
pub use farm_settings::FarmSettingsService;
pub use note::NoteService;
pub use task::TaskService;
pub use user::UserService;
