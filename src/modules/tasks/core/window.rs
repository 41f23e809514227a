// Filter accepted by the duration query.
//
// A window is expanded into a fixed-order list of predicates. Adapters either render the list into
// a parameterized statement or evaluate it against rows held in memory, so both agree on which
// tasks qualify.

use chrono::{DateTime, Utc};

use crate::modules::tasks::core::task::Task;
use crate::shared::core::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskWindow {
    pub user_id: UserId,
    pub start_period: Option<DateTime<Utc>>,
    pub end_period: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPredicate {
    OwnedBy(UserId),
    Closed,
    StartedAtOrAfter(DateTime<Utc>),
    EndedAtOrBefore(DateTime<Utc>),
}

impl TaskWindow {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            start_period: None,
            end_period: None,
        }
    }

    pub fn starting_from(mut self, start_period: DateTime<Utc>) -> Self {
        self.start_period = Some(start_period);
        self
    }

    pub fn ending_by(mut self, end_period: DateTime<Utc>) -> Self {
        self.end_period = Some(end_period);
        self
    }

    pub fn predicates(&self) -> Vec<TaskPredicate> {
        let mut predicates = vec![TaskPredicate::OwnedBy(self.user_id), TaskPredicate::Closed];
        if let Some(start_period) = self.start_period {
            predicates.push(TaskPredicate::StartedAtOrAfter(start_period));
        }
        if let Some(end_period) = self.end_period {
            predicates.push(TaskPredicate::EndedAtOrBefore(end_period));
        }
        predicates
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.predicates().iter().all(|predicate| predicate.matches(task))
    }
}

impl TaskPredicate {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskPredicate::OwnedBy(user_id) => task.user_id == *user_id,
            TaskPredicate::Closed => task.is_closed(),
            TaskPredicate::StartedAtOrAfter(start_period) => task.start_time >= *start_period,
            TaskPredicate::EndedAtOrBefore(end_period) => {
                task.end_time.is_some_and(|end_time| end_time <= *end_period)
            }
        }
    }
}
