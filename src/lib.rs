pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod database;
        pub mod http_response;
    }
}

pub mod modules {
    pub mod tasks {
        pub mod core {
            pub mod duration;
            pub mod errors;
            pub mod task;
            pub mod window;
        }
        pub mod use_cases {
            pub mod create_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod close_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_task {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_tasks_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod task_store;
                pub mod task_store_in_memory;
                pub mod task_store_postgres;
            }
        }
    }
    pub mod users {
        pub mod core {
            pub mod errors;
            pub mod filter;
            pub mod passport;
            pub mod user;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod passport_info;
                pub mod passport_info_http;
                pub mod passport_info_in_memory;
                pub mod user_store;
                pub mod user_store_in_memory;
                pub mod user_store_postgres;
            }
        }
    }
}

pub mod shell;
