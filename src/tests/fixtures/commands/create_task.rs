use chrono::{DateTime, TimeZone, Utc};

use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::shared::core::primitives::UserId;

pub struct CreateTaskBuilder {
    user_id: UserId,
    name: String,
    start_time: Option<DateTime<Utc>>,
}

impl CreateTaskBuilder {
    pub fn new() -> Self {
        Self {
            user_id: 1,
            name: "write spec".into(),
            start_time: Some(Utc.with_ymd_and_hms(2024, 7, 15, 10, 35, 35).unwrap()),
        }
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_time(mut self, start_time: Option<DateTime<Utc>>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn build(self) -> CreateTask {
        CreateTask {
            user_id: self.user_id,
            name: self.name,
            start_time: self.start_time,
        }
    }
}
