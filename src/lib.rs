//! # 用户注册服务
//!
//! 基于 Axum 的内存用户注册表 HTTP 服务：
//! - `GET /` 与 `GET /test` 返回固定文本
//! - `GET /users` 返回全部用户
//! - `POST /register-user` 注册新用户
//! - `DELETE /delete-user/:id` 按 id 删除用户

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::users::{RegisterUserRequest, User, UserStore};
pub use crate::core::routes::build_router;
pub use infrastructure::config::ServerConfig;
pub use server::serve;
