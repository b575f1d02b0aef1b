//! 用户注册表服务
//!
//! 注册表是进程内的有序用户列表，启动时写入两条种子数据，
//! 由 [`UserStore`] 持有并在各个处理器之间共享。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::model::{RegisterUserRequest, User};

#[derive(Debug)]
struct Registry {
    users: Vec<User>,
    next_id: u64,
}

impl Registry {
    fn from_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        Self { users, next_id }
    }
}

/// 共享的用户注册表
///
/// 所有修改都在互斥锁内完成，克隆得到的句柄指向同一份数据。
#[derive(Debug, Clone)]
pub struct UserStore {
    inner: Arc<Mutex<Registry>>,
}

impl UserStore {
    /// 创建包含种子数据的注册表
    pub fn seeded() -> Self {
        Self::with_users(vec![User::new(1, "John", 16), User::new(2, "Mc", 21)])
    }

    /// 用给定记录创建注册表，下一个 id 从现有最大 id 之后开始
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry::from_users(users))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // 临界区内没有可能留下半完成状态的操作，锁中毒时继续使用内部数据
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 按插入顺序返回全部用户
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    /// 追加新用户并返回更新后的完整列表
    pub fn register(&self, request: RegisterUserRequest) -> Vec<User> {
        let mut registry = self.lock();
        let user = User {
            id: registry.next_id,
            name: request.name,
            age: request.age,
        };
        registry.next_id += 1;
        registry.users.push(user);
        registry.users.clone()
    }

    /// 删除所有 id 匹配的用户，返回更新后的完整列表和移除的条数；未匹配时列表不变
    pub fn delete(&self, id: u64) -> (Vec<User>, usize) {
        let mut registry = self.lock();
        let before = registry.users.len();
        registry.users.retain(|user| user.id != id);
        let removed = before - registry.users.len();
        (registry.users.clone(), removed)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}
