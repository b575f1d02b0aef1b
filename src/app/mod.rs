//! 应用层

pub mod home;
pub mod users;

use users::UserStore;

/// 路由共享状态
#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}
