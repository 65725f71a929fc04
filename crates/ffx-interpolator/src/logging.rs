//! Tracing setup for hosts that do not install their own subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Only the first call has any effect, and an already
/// installed global subscriber is left in place.
pub fn init_tracing(default_filter: &str) {
    TRACING.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
