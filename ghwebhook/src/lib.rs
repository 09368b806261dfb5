//! Two small GitHub webhook receivers: one dumps whatever JSON shows up,
//! the other parses a handful of typed events and announces repository
//! stars. See the binaries under `src/bin/`.

#[macro_use]
extern crate hyper;

pub mod ghevent;
pub mod server;
pub mod webhook;

pub fn setup_log() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if std::env::var("RUST_LOG_JSON").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
