use std::sync::Arc;

use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::adapters::outbound::task_store_in_memory::InMemoryTaskStore;
use crate::modules::tasks::adapters::outbound::task_store_postgres::PostgresTaskStore;
use crate::modules::tasks::use_cases::close_task::handler::CloseTaskHandler;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandler;
use crate::modules::tasks::use_cases::delete_task::handler::DeleteTaskHandler;
use crate::modules::tasks::use_cases::list_tasks_by_user::handler::ListTasksByUserHandler;
use crate::modules::users::adapters::outbound::passport_info::PassportInfoProvider;
use crate::modules::users::adapters::outbound::passport_info_http::HttpPassportInfoProvider;
use crate::modules::users::adapters::outbound::user_store::UserStore;
use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::modules::users::adapters::outbound::user_store_postgres::PostgresUserStore;
use crate::modules::users::use_cases::delete_user::handler::DeleteUserHandler;
use crate::modules::users::use_cases::get_user::handler::GetUserHandler;
use crate::modules::users::use_cases::list_users::handler::ListUsersHandler;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::users::use_cases::update_user::handler::UpdateUserHandler;
use crate::shared::infrastructure::database;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskStore>,
    pub users: Arc<dyn UserStore>,
    pub create_task: Arc<CreateTaskHandler<dyn TaskStore>>,
    pub close_task: Arc<CloseTaskHandler<dyn TaskStore>>,
    pub delete_task: Arc<DeleteTaskHandler<dyn TaskStore>>,
    pub list_tasks_by_user: Arc<ListTasksByUserHandler<dyn TaskStore>>,
    pub register_user: Arc<RegisterUserHandler<dyn UserStore, dyn PassportInfoProvider>>,
    pub get_user: Arc<GetUserHandler<dyn UserStore>>,
    pub list_users: Arc<ListUsersHandler<dyn UserStore>>,
    pub update_user: Arc<UpdateUserHandler<dyn UserStore>>,
    pub delete_user: Arc<DeleteUserHandler<dyn UserStore>>,
}

impl AppState {
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        users: Arc<dyn UserStore>,
        passport_info: Arc<dyn PassportInfoProvider>,
    ) -> Self {
        Self {
            create_task: Arc::new(CreateTaskHandler::new(tasks.clone())),
            close_task: Arc::new(CloseTaskHandler::new(tasks.clone())),
            delete_task: Arc::new(DeleteTaskHandler::new(tasks.clone())),
            list_tasks_by_user: Arc::new(ListTasksByUserHandler::new(tasks.clone())),
            register_user: Arc::new(RegisterUserHandler::new(users.clone(), passport_info)),
            get_user: Arc::new(GetUserHandler::new(users.clone())),
            list_users: Arc::new(ListUsersHandler::new(users.clone())),
            update_user: Arc::new(UpdateUserHandler::new(users.clone())),
            delete_user: Arc::new(DeleteUserHandler::new(users.clone())),
            tasks,
            users,
        }
    }

    pub fn in_memory(passport_info: Arc<dyn PassportInfoProvider>) -> Self {
        let tasks: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
        let users = Arc::new(InMemoryUserStore::with_tasks(tasks.clone()));
        Self::new(tasks, users, passport_info)
    }

    /// Wires Postgres stores when a database is configured, the in-memory stores otherwise.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let passport_info = Arc::new(HttpPassportInfoProvider::new(
            config.passport_api.base_url.clone(),
            config.passport_api.timeout,
        )?);

        match &config.database {
            Some(database_config) => {
                let pool = database::connect(database_config).await?;
                database::migrate(&pool).await?;
                Ok(Self::new(
                    Arc::new(PostgresTaskStore::new(pool.clone())),
                    Arc::new(PostgresUserStore::new(pool)),
                    passport_info,
                ))
            }
            None => {
                tracing::warn!("DB_HOST is not set, using in-memory stores");
                Ok(Self::in_memory(passport_info))
            }
        }
    }
}
