//! 用户注册表

pub mod handler;
pub mod model;
pub mod service;

pub use model::{RegisterUserRequest, User};
pub use service::UserStore;
