//! # quorum-client
//!
//! The session layer of the Quorum conversation client: configuration,
//! notification sink, and the [`SessionController`] that ties the
//! gateway, the stores and the pending attachment into one coherent
//! view state.

pub mod config;
pub mod controller;
pub mod notify;

#[cfg(test)]
pub(crate) mod testing;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::{Permissions, SessionConfig};
pub use controller::SessionController;
pub use notify::{Notifier, Severity, TracingNotifier};

/// Initialise structured logging for an embedding application.
///
/// `RUST_LOG` overrides the defaults.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("quorum_client=debug,quorum_gateway=debug,quorum_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
