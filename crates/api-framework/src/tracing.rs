//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose level
//! is taken from `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info recipe-client feed     # lifecycle and fallback decisions
//! RUST_LOG=debug recipe-client feed    # every request path and response size
//! ```
//!
//! With `info`, a feed load that hits a stopped server reads:
//!
//! ```text
//! WARN load_feed: Read failed, using bundled data resource="recipes" error=Cannot connect to backend server at http://10.0.2.2:8000/api. Make sure the API server is running.
//! INFO Feed loaded source=Fallback count=6
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
