// Composition root.
//
// Reads configuration, installs telemetry, wires adapters into the use case handlers and
// exposes them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
