pub type TaskId = i64;
pub type UserId = i64;
