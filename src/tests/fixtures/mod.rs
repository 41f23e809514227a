pub mod commands {
    pub mod create_task;
}
pub mod state;
pub mod users;
