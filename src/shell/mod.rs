// Composition root for the lybs module.
//
// - config: settings read from the environment at startup.
// - state: concrete in-memory stores wired into the use case handlers.
// - http / graphql: the routers exposed by the `lyb` binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
