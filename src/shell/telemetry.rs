use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::shell::config::Environment;

fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Local | Environment::Dev => "time_tracker=debug,tower_http=debug,info",
        Environment::Prod => "info",
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the environment default.
pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)));
    let registry = tracing_subscriber::registry().with(filter);

    match environment {
        Environment::Local => registry.with(fmt::layer().with_target(true)).init(),
        Environment::Dev | Environment::Prod => registry
            .with(fmt::layer().json().with_current_span(true))
            .init(),
    }
}
