use crate::shared::core::primitives::{TaskId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTask {
    pub task_id: TaskId,
    pub user_id: UserId,
}
